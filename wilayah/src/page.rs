use crate::catalog::Catalog;
use crate::config::ViewConfig;
use crate::model::{Level, RegionId};
use crate::selection::Selection;
use crate::view::{derive_view, ViewModel};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub level: Level,
    pub caption: String,
    pub placeholder: String,
    /// Raw query value, "" when the key is absent.
    pub selected: String,
    pub enabled: bool,
    pub options: Vec<DropdownOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub level: Level,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub segments: Vec<Crumb>,
}

/// One block of the centered display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: Level,
    pub caption: String,
    pub name: String,
    /// Draw a connector from the heading above. Only set when the level
    /// directly above also resolved, so an unresolved regency leaves the
    /// district heading unconnected.
    pub connected: bool,
}

/// Renderer-facing state for the whole screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub view: ViewModel,
    pub dropdowns: Vec<Dropdown>,
    pub breadcrumb: Breadcrumb,
    pub headings: Vec<Heading>,
}

const LEVELS: [Level; 3] = [Level::Province, Level::Regency, Level::District];

/// The regency selector needs a province, the district selector a regency.
pub fn is_enabled(selection: &Selection, level: Level) -> bool {
    match level {
        Level::Country | Level::Province => true,
        Level::Regency => selection.is_set(Level::Province),
        Level::District => selection.is_set(Level::Regency),
    }
}

pub fn build_page(catalog: &Catalog, selection: &Selection, config: &ViewConfig) -> PageState {
    let view = derive_view(catalog, selection);

    let dropdowns = LEVELS
        .iter()
        .map(|&level| {
            let options: Vec<DropdownOption> = match level {
                Level::Province => catalog
                    .provinces()
                    .iter()
                    .map(|p| option(p.id, &p.name))
                    .collect(),
                Level::Regency => view.filtered_regencies.iter().map(|r| option(r.id, &r.name)).collect(),
                Level::District => view.filtered_districts.iter().map(|d| option(d.id, &d.name)).collect(),
                Level::Country => Vec::new(),
            };
            Dropdown {
                level,
                caption: config.caption(level).to_string(),
                placeholder: config.placeholder(level).to_string(),
                selected: selection.raw(level).unwrap_or_default().to_string(),
                enabled: is_enabled(selection, level),
                options,
            }
        })
        .collect();

    let mut segments = vec![Crumb {
        level: Level::Country,
        label: config.country_label.clone(),
        active: view.active_level == Level::Country,
    }];
    let mut headings = Vec::new();
    for &level in &LEVELS {
        let name = view.name(level);
        if name.is_empty() {
            continue;
        }
        segments.push(Crumb { level, label: name.to_string(), active: view.active_level == level });
        let connected = match level {
            Level::Regency => !view.province_name.is_empty(),
            Level::District => !view.regency_name.is_empty(),
            Level::Country | Level::Province => false,
        };
        headings.push(Heading {
            level,
            caption: config.caption(level).to_string(),
            name: name.to_string(),
            connected,
        });
    }

    PageState { view, dropdowns, breadcrumb: Breadcrumb { segments }, headings }
}

fn option(id: RegionId, name: &str) -> DropdownOption {
    DropdownOption { value: id.to_string(), label: name.to_string() }
}
