//! Soil moisture monitoring page.

use super::sensor::SensorPage;
use dioxus::prelude::*;
use farm_core::area::SensorKind;

#[component]
pub fn SoilMoisture() -> Element {
    rsx! { SensorPage { kind: SensorKind::SoilMoisture } }
}
