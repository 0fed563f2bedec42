use dioxus::prelude::*;
use shared_types::Case;

use crate::format_helpers::format_created;
use crate::routes::Route;

/// One rendered row of the case list.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow {
    pub case_id: String,
    pub name: String,
    pub status: &'static str,
    pub created: String,
}

pub fn case_rows(cases: &[Case]) -> Vec<CaseRow> {
    cases
        .iter()
        .map(|case| CaseRow {
            case_id: case.case_id.clone(),
            name: case.case_name.clone(),
            status: case.status.as_str(),
            created: format_created(case),
        })
        .collect()
}

/// Ordered list of case summaries, each linking to its detail page.
#[component]
pub fn CaseList(cases: Vec<Case>) -> Element {
    if cases.is_empty() {
        return rsx! {
            p { class: "case-list-empty", "No cases found." }
        };
    }

    rsx! {
        ul { class: "case-list",
            for row in case_rows(&cases) {
                li { key: "{row.case_id}", class: "case-list-item",
                    Link { to: Route::CasePage { case_id: row.case_id.clone() },
                        span { class: "case-name", "{row.name}" }
                        span { class: "case-status", "{row.status}" }
                        span { class: "case-created", "{row.created}" }
                    }
                }
            }
        }
    }
}
