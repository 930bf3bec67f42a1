use std::time::Instant;
use wilayah::{Catalog, CatalogData, District, Province, Regency, RegionFilter, Selection};

struct Args {
    provinces: u32,
    per_parent: u32,
    iters: usize,
    assert_ms: Option<f64>,
}

impl Args {
    fn parse() -> Args {
        let mut args = Args { provinces: 38, per_parent: 30, iters: 10_000, assert_ms: None };
        for arg in std::env::args().skip(1) {
            let Some((key, val)) = arg.split_once('=') else { continue };
            match key {
                "--provinces" => args.provinces = val.parse().unwrap_or(args.provinces),
                "--per-parent" => args.per_parent = val.parse().unwrap_or(args.per_parent),
                "--iters" => args.iters = val.parse().unwrap_or(args.iters),
                "--assert-ms" => args.assert_ms = val.parse().ok(),
                _ => eprintln!("ignoring unknown flag {}", key),
            }
        }
        // Keep generated ids inside the 2/4/6-digit scheme
        args.provinces = args.provinces.clamp(1, 89);
        args.per_parent = args.per_parent.clamp(1, 99);
        args
    }
}

fn next_rand(seed: &mut u64) -> u32 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (*seed >> 33) as u32
}

fn build_catalog(provinces: u32, per_parent: u32) -> Catalog {
    let mut data = CatalogData::default();
    for pid in (0..provinces).map(|p| 11 + p) {
        data.provinces.push(Province { id: pid, name: format!("Provinsi {}", pid) });
        for rid in (1..=per_parent).map(|r| pid * 100 + r) {
            data.regencies.push(Regency {
                id: rid,
                name: format!("Kabupaten {}", rid),
                province_id: pid,
            });
            for did in (1..=per_parent).map(|d| rid * 100 + d) {
                data.districts.push(District {
                    id: did,
                    name: format!("Kecamatan {}", did),
                    regency_id: rid,
                });
            }
        }
    }
    Catalog::new(data)
}

/// Nearest-rank quantile of an ascending sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n => sorted[((n as f64 * q).ceil() as usize).clamp(1, n) - 1],
    }
}

fn main() {
    let args = Args::parse();

    let t_build = Instant::now();
    let filter = RegionFilter::new(build_catalog(args.provinces, args.per_parent));
    let build_ms = t_build.elapsed().as_secs_f64() * 1000.0;

    let mut seed = 0x5EED_1234_ABCDu64;
    let mut samples = Vec::with_capacity(args.iters);
    let mut resolved = 0usize;
    for _ in 0..args.iters {
        let pid = 11 + next_rand(&mut seed) % args.provinces;
        let rid = pid * 100 + 1 + next_rand(&mut seed) % args.per_parent;
        // One id past the last district of each regency, so some lookups miss
        let did = rid * 100 + 1 + next_rand(&mut seed) % (args.per_parent + 1);
        let query = format!("province={}&regency={}&district={}", pid, rid, did);

        let t0 = Instant::now();
        let view = filter.view(&Selection::from_query(&query));
        samples.push(t0.elapsed().as_secs_f64() * 1000.0);
        if view.active_level == wilayah::Level::District {
            resolved += 1;
        }
    }
    samples.sort_by(f64::total_cmp);
    let total_ms: f64 = samples.iter().sum();
    let median = quantile(&samples, 0.5);

    println!(
        "provinces={} per_parent={} districts={} build_ms={:.3} iters={} resolved={} \
         total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        args.provinces,
        args.per_parent,
        filter.catalog().districts().len(),
        build_ms,
        args.iters,
        resolved,
        total_ms,
        median,
        quantile(&samples, 0.9),
        quantile(&samples, 0.99),
    );
    if let Some(limit) = args.assert_ms.filter(|&limit| median > limit) {
        eprintln!("median {:.4} ms over the {:.3} ms limit", median, limit);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_uses_nearest_rank() {
        let s = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&s, 0.5), 2.0);
        assert_eq!(quantile(&s, 0.99), 4.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
    }

    #[test]
    fn synthetic_catalog_follows_id_scheme() {
        let c = build_catalog(2, 3);
        assert_eq!(c.districts().len(), 18);
        assert_eq!(c.district(120_303).map(|d| d.regency_id), Some(1203));
    }
}
