//! Inline SVG icons keyed by the symbolic names in the section table.

use leptos::prelude::*;

pub fn render_icon(name: &str) -> impl IntoView {
    match name {
        "gauge" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 14 A7 7 0 1 1 17 14" />
                <line x1="10" y1="14" x2="13.5" y2="8.5" />
            </svg>
        }
        .into_any(),
        "car" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 12 L5 7 H15 L17 12 V15 H3 Z" />
                <circle cx="6.5" cy="15" r="1.5" />
                <circle cx="13.5" cy="15" r="1.5" />
            </svg>
        }
        .into_any(),
        "users" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7.5" cy="7" r="3" />
                <path d="M2 17 C2 13.5 4.5 12 7.5 12 C10.5 12 13 13.5 13 17" />
                <path d="M13 4.5 A2.5 2.5 0 0 1 13 9.5" />
                <path d="M15 12.5 C16.8 13.2 18 14.8 18 17" />
            </svg>
        }
        .into_any(),
        "key" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="6.5" cy="13.5" r="3.5" />
                <path d="M9 11 L17 3" />
                <path d="M14 6 L16 8" />
            </svg>
        }
        .into_any(),
        "card" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="4.5" width="16" height="11" />
                <line x1="2" y1="8" x2="18" y2="8" />
                <line x1="5" y1="12.5" x2="9" y2="12.5" />
            </svg>
        }
        .into_any(),
        "chart" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="17" x2="17" y2="17" />
                <rect x="4.5" y="10" width="2.5" height="7" />
                <rect x="9" y="6" width="2.5" height="11" />
                <rect x="13.5" y="3" width="2.5" height="14" />
            </svg>
        }
        .into_any(),
        "cog" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3" />
                <path d="M10 2 V4.5 M10 15.5 V18 M2 10 H4.5 M15.5 10 H18 M4.3 4.3 L6.1 6.1 M13.9 13.9 L15.7 15.7 M4.3 15.7 L6.1 13.9 M13.9 6.1 L15.7 4.3" />
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3" />
            </svg>
        }
        .into_any(),
    }
}
