//! Temperature monitoring page.

use super::sensor::SensorPage;
use dioxus::prelude::*;
use farm_core::area::SensorKind;

#[component]
pub fn Temperature() -> Element {
    rsx! { SensorPage { kind: SensorKind::Temperature } }
}
