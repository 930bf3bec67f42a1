use wilayah::{
    Catalog, CatalogData, District, FilterEvent, Level, Province, Regency, RegionFilter, Selection,
    ViewConfig,
};

fn filter() -> RegionFilter {
    let data = CatalogData {
        provinces: vec![
            Province { id: 32, name: "Jawa Barat".into() },
            Province { id: 33, name: "Jawa Tengah".into() },
        ],
        regencies: vec![
            Regency { id: 3273, name: "Kota Bandung".into(), province_id: 32 },
            Regency { id: 3374, name: "Kota Semarang".into(), province_id: 33 },
        ],
        districts: vec![District { id: 327301, name: "Sukasari".into(), regency_id: 3273 }],
    };
    RegionFilter::new(Catalog::new(data))
}

#[test]
fn province_change_drops_lower_levels() {
    let s = Selection::from_query("province=32&regency=3273&district=327301");
    let next = s.set_province("33");
    assert_eq!(next.to_query(), "province=33");
    assert_eq!(next.regency, None);
    assert_eq!(next.district, None);
}

#[test]
fn clearing_province_equals_reset() {
    let s = Selection::from_query("province=32&regency=3273&utm=x");
    assert_eq!(s.set_province(""), Selection::reset());
    assert_eq!(Selection::reset().to_query(), "");
}

#[test]
fn regency_change_always_drops_district() {
    for q in ["province=32&regency=3273&district=327301", "province=32&district=1", "province=32"] {
        let next = Selection::from_query(q).set_regency("3273");
        assert_eq!(next.district, None, "{q}");
        assert_eq!(next.regency.as_deref(), Some("3273"));
    }
}

#[test]
fn missing_ancestors_are_written_empty() {
    let next = Selection::empty().set_regency("3273");
    assert_eq!(next.to_query(), "province=&regency=3273");

    let next = Selection::from_query("regency=3273").set_district("327301");
    assert_eq!(next.province.as_deref(), Some(""));
    assert_eq!(next.to_query(), "province=&regency=3273&district=327301");
}

#[test]
fn district_change_keeps_ancestors() {
    let next = Selection::from_query("province=32&regency=3273&district=1").set_district("327301");
    assert_eq!(next.to_query(), "province=32&regency=3273&district=327301");
}

#[test]
fn apply_ignores_disabled_selectors() {
    let f = filter();
    let empty = Selection::empty();
    assert_eq!(f.apply(&empty, FilterEvent::RegencyChanged("3273".into())), empty);
    assert_eq!(f.apply(&empty, FilterEvent::DistrictChanged("327301".into())), empty);

    let with_province = Selection::from_query("province=32");
    assert_eq!(
        f.apply(&with_province, FilterEvent::DistrictChanged("327301".into())),
        with_province
    );
    assert_eq!(
        f.apply_query("province=32", FilterEvent::RegencyChanged("3273".into())),
        "province=32&regency=3273"
    );
}

#[test]
fn apply_walks_down_and_resets() {
    let f = filter();
    let mut q = String::new();
    q = f.apply_query(&q, FilterEvent::ProvinceChanged("32".into()));
    q = f.apply_query(&q, FilterEvent::RegencyChanged("3273".into()));
    q = f.apply_query(&q, FilterEvent::DistrictChanged("327301".into()));
    assert_eq!(q, "province=32&regency=3273&district=327301");
    assert_eq!(f.view(&Selection::from_query(&q)).active_level, Level::District);
    assert_eq!(f.apply_query(&q, FilterEvent::Reset), "");
}

#[test]
fn event_parse_covers_renderer_kinds() {
    assert_eq!(FilterEvent::parse("province", "32"), Some(FilterEvent::ProvinceChanged("32".into())));
    assert_eq!(FilterEvent::parse("reset", "ignored"), Some(FilterEvent::Reset));
    assert_eq!(FilterEvent::parse("village", "1"), None);
}

#[test]
fn page_state_tracks_enablement_and_breadcrumb() {
    let f = filter();
    let page = f.page(&Selection::empty());
    let enabled: Vec<bool> = page.dropdowns.iter().map(|d| d.enabled).collect();
    assert_eq!(enabled, vec![true, false, false]);
    assert_eq!(page.dropdowns[0].options.len(), 2);
    assert_eq!(page.dropdowns[0].placeholder, "Pilih Provinsi");
    assert_eq!(page.breadcrumb.segments.len(), 1);
    assert!(page.breadcrumb.segments[0].active);
    assert_eq!(page.breadcrumb.segments[0].label, "Indonesia");
    assert!(page.headings.is_empty());

    let page = f.page(&Selection::from_query("province=32&regency=3273"));
    let enabled: Vec<bool> = page.dropdowns.iter().map(|d| d.enabled).collect();
    assert_eq!(enabled, vec![true, true, true]);
    assert_eq!(page.dropdowns[1].selected, "3273");
    assert_eq!(page.dropdowns[1].options[0].value, "3273");
    assert_eq!(page.dropdowns[2].options[0].label, "Sukasari");
    assert_eq!(page.dropdowns[2].selected, "");
    let crumbs: Vec<(&str, bool)> =
        page.breadcrumb.segments.iter().map(|c| (c.label.as_str(), c.active)).collect();
    assert_eq!(crumbs, vec![("Indonesia", false), ("Jawa Barat", false), ("Kota Bandung", true)]);
    let headings: Vec<&str> = page.headings.iter().map(|h| h.caption.as_str()).collect();
    assert_eq!(headings, vec!["PROVINSI", "KOTA / KABUPATEN"]);
}

#[test]
fn config_overrides_labels() {
    let cfg: ViewConfig = serde_json::from_str(r#"{"country_label":"Nusantara"}"#).unwrap();
    assert_eq!(cfg.province_caption, "PROVINSI");
    let f = RegionFilter::with_config(filter().catalog().clone(), cfg);
    let page = f.page(&Selection::empty());
    assert_eq!(page.breadcrumb.segments[0].label, "Nusantara");
}

#[test]
fn headings_connect_only_to_the_level_directly_above() {
    let f = filter();
    let connected = |q: &str| -> Vec<(Level, bool)> {
        f.page(&Selection::from_query(q)).headings.iter().map(|h| (h.level, h.connected)).collect()
    };
    assert_eq!(
        connected("province=32&regency=3273&district=327301"),
        vec![(Level::Province, false), (Level::Regency, true), (Level::District, true)]
    );
    // Regency name unresolved: no province -> district connector
    assert_eq!(
        connected("province=32&regency=&district=327301"),
        vec![(Level::Province, false), (Level::District, false)]
    );
    assert_eq!(connected("province=32&regency=9999&district=327301")[1], (Level::District, false));
}
