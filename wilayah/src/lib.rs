pub mod model;
pub mod catalog;
pub mod config;
pub mod error;
pub mod limits;
pub mod page;
pub mod selection;
pub mod view;
mod json;

pub use catalog::Catalog;
pub use config::ViewConfig;
pub use error::CatalogError;
pub use json::{from_json_value_strict, JsonSource, ValueSource};
pub use model::{CatalogData, District, Level, Province, Regency, RegionId};
pub use page::{Breadcrumb, Crumb, Dropdown, DropdownOption, Heading, PageState};
pub use selection::Selection;
pub use view::{derive_view, ViewModel};

use tracing::debug;

/// Where a catalog comes from. One read, all three collections, no paging.
pub trait CatalogSource {
    fn load(&self) -> Result<CatalogData, CatalogError>;
}

/// A user interaction with the filter panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    ProvinceChanged(String),
    RegencyChanged(String),
    DistrictChanged(String),
    Reset,
}

impl FilterEvent {
    /// Builds an event from the string pair a renderer reports
    /// (`"province" | "regency" | "district" | "reset"`).
    pub fn parse(kind: &str, value: &str) -> Option<FilterEvent> {
        match kind {
            "province" => Some(FilterEvent::ProvinceChanged(value.to_string())),
            "regency" => Some(FilterEvent::RegencyChanged(value.to_string())),
            "district" => Some(FilterEvent::DistrictChanged(value.to_string())),
            "reset" => Some(FilterEvent::Reset),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self {
            FilterEvent::ProvinceChanged(_) => Some(Level::Province),
            FilterEvent::RegencyChanged(_) => Some(Level::Regency),
            FilterEvent::DistrictChanged(_) => Some(Level::District),
            FilterEvent::Reset => None,
        }
    }
}

/// Cascading province/regency/district filter over a loaded catalog.
///
/// Holds no selection of its own; every call takes the selection parsed from
/// the current query string and returns either derived state or the next
/// selection to write back.
pub struct RegionFilter {
    catalog: Catalog,
    config: ViewConfig,
}

impl RegionFilter {
    pub fn new(catalog: Catalog) -> RegionFilter {
        RegionFilter { catalog, config: ViewConfig::default() }
    }

    pub fn with_config(catalog: Catalog, config: ViewConfig) -> RegionFilter {
        RegionFilter { catalog, config }
    }

    pub fn load(source: &impl CatalogSource, config: ViewConfig) -> Result<RegionFilter, CatalogError> {
        Ok(RegionFilter::with_config(Catalog::load(source)?, config))
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn config(&self) -> &ViewConfig { &self.config }

    pub fn view(&self, selection: &Selection) -> ViewModel {
        derive_view(&self.catalog, selection)
    }

    pub fn page(&self, selection: &Selection) -> PageState {
        page::build_page(&self.catalog, selection, &self.config)
    }

    /// Next selection after `event`. Changes aimed at a disabled selector
    /// leave the selection as it is.
    pub fn apply(&self, current: &Selection, event: FilterEvent) -> Selection {
        if let Some(level) = event.level() {
            if !page::is_enabled(current, level) {
                debug!(level = level.as_str(), "ignoring change on disabled selector");
                return current.clone();
            }
        }
        match event {
            FilterEvent::ProvinceChanged(v) => current.set_province(&v),
            FilterEvent::RegencyChanged(v) => current.set_regency(&v),
            FilterEvent::DistrictChanged(v) => current.set_district(&v),
            FilterEvent::Reset => Selection::reset(),
        }
    }

    /// Query-string in, query-string out.
    pub fn apply_query(&self, query: &str, event: FilterEvent) -> String {
        self.apply(&Selection::from_query(query), event).to_query()
    }
}
