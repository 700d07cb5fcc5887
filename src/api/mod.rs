mod brush_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod filtered_view;
mod focus_controller;
mod interaction_coordinator;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod presets;
mod range_controller;
mod validation;
mod view_state;

pub use engine::ViewEngine;
pub use engine_config::ViewEngineConfig;
pub use engine_snapshot::ViewSnapshot;
pub use filtered_view::{AxisScales, FilteredView};
pub use focus_controller::TableRow;
pub use json_contract::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshotJsonContractV1};
pub use presets::{DropdownChoice, RangePreset, dropdown_options};
pub use view_state::{Transition, ViewState, WindowLabel};
