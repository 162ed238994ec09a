use dioxus::prelude::*;

/// Shown while the repository is being seeded.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading farm data...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 12px; padding: 64px; color: #4b5563;",
            div {
                style: "width: 40px; height: 40px; border: 4px solid #dcfce7; border-top-color: #16a34a; border-radius: 9999px; animation: farm-spin 0.8s linear infinite;",
            }
            style { "@keyframes farm-spin {{ to {{ transform: rotate(360deg); }} }}" }
            span { style: "font-size: 14px;", "🌱 {message}" }
        }
    }
}
