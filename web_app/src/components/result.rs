//! Module with [`ResultBox`] component showing the last analysis outcome.

use detective_cycle::render::{DetailsTable, HeadingsTable, ResultView, Tables};
use leptos::{component, view, CollectView as _, IntoView, ReadSignal, SignalGet as _};

/// Result box, hidden until the first outcome arrives.
#[component]
pub fn ResultBox(
    /// Last shown outcome.
    result: ReadSignal<Option<ResultView>>,
) -> impl IntoView {
    move || {
        result.get().map(|ResultView { banner, tables }| {
            let tables = tables.map(|Tables { headings, details }| {
                view! {
                    <HeadingsCountTable headings=headings/>
                    <DetailTable details=details/>
                }
            });

            view! {
                <div id="result_box">
                    <div id="alert" class=banner.kind.class() role="alert">
                        <span id="alert_message">{banner.message}</span>
                    </div>
                    {tables}
                </div>
            }
        })
    }
}

#[component]
fn HeadingsCountTable(headings: HeadingsTable) -> impl IntoView {
    let names = (1..=6_u8)
        .map(|level| view! { <th>{format!("H{level}")}</th> })
        .collect_view();
    let counts = (1..=6_u8)
        .zip(headings.counts)
        .map(|(level, count)| view! { <td id=format!("headings-count-h{level}")>{count}</td> })
        .collect_view();

    view! {
        <table id="heading_result_table" class="table">
            <thead><tr>{names}</tr></thead>
            <tbody><tr>{counts}</tr></tbody>
        </table>
    }
}

#[component]
fn DetailTable(details: DetailsTable) -> impl IntoView {
    let rows = [
        ("Page title", "page-title", details.page_title),
        ("HTML version", "html-version", details.html_version),
        ("Internal links", "internal-links", details.internal_links),
        ("External links", "external-links", details.external_links),
        ("Inaccessible links", "inaccessible-links", details.inaccessible_links),
        ("Has login form", "has-login", details.has_login_form.to_owned()),
    ];

    let rows = rows
        .into_iter()
        .map(|(label, id, value)| {
            view! {
                <tr>
                    <th>{label}</th>
                    <td id=id>{value}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table id="result_table" class="table">
            <tbody>{rows}</tbody>
        </table>
    }
}
