use shared::{
    format_date, format_money, FinanceSummary, GenerateReportRequest, Report, ReportFormat,
    ReportType, StatusReport,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::status_badge::pass_fail_badge;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::download;
use crate::services::logging::Logger;

const REPORT_TYPES: [ReportType; 4] = [
    ReportType::FinanceSummary,
    ReportType::UnpaidStudents,
    ReportType::FacultyBreakdown,
    ReportType::PaymentLedger,
];

const FORMATS: [ReportFormat; 4] = [
    ReportFormat::Json,
    ReportFormat::Csv,
    ReportFormat::Pdf,
    ReportFormat::Excel,
];

fn type_value(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::FinanceSummary => "finance_summary",
        ReportType::UnpaidStudents => "unpaid_students",
        ReportType::FacultyBreakdown => "faculty_breakdown",
        ReportType::PaymentLedger => "payment_ledger",
    }
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let recent = use_state(Vec::<Report>::new);
    let recent_loading = use_state(|| true);
    let summary = use_state(|| None::<FinanceSummary>);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let report_type = use_state(|| ReportType::FinanceSummary);
    let format = use_state(|| ReportFormat::Json);
    let generating = use_state(|| false);

    let threshold = use_state(|| "0".to_string());
    let status_report = use_state(|| None::<StatusReport>);
    let status_loading = use_state(|| false);

    // The recent-reports feed and the summary snapshot are fetched
    // concurrently on mount; they share nothing and finish in any order.
    use_effect_with((), {
        let api_client = api_client.clone();
        let recent = recent.clone();
        let recent_loading = recent_loading.clone();
        let summary = summary.clone();
        let error_message = error_message.clone();

        move |_| {
            {
                let api_client = api_client.clone();
                let recent = recent.clone();
                let recent_loading = recent_loading.clone();
                let error_message = error_message.clone();
                spawn_local(async move {
                    match api_client.recent_reports().await {
                        Ok(response) => recent.set(response.reports),
                        Err(e) => {
                            Logger::error_with_component("reports", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }
                    recent_loading.set(false);
                });
            }

            {
                let summary = summary.clone();
                spawn_local(async move {
                    match api_client.finance_summary().await {
                        Ok(response) => summary.set(Some(response)),
                        Err(e) => {
                            // The quick-export panel simply stays hidden.
                            Logger::warn_with_component("reports", &e.to_string());
                        }
                    }
                });
            }

            || ()
        }
    });

    let on_type_change = {
        let report_type = report_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            report_type.set(match select.value().as_str() {
                "unpaid_students" => ReportType::UnpaidStudents,
                "faculty_breakdown" => ReportType::FacultyBreakdown,
                "payment_ledger" => ReportType::PaymentLedger,
                _ => ReportType::FinanceSummary,
            });
        })
    };

    let on_format_change = {
        let format = format.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            format.set(match select.value().as_str() {
                "CSV" => ReportFormat::Csv,
                "PDF" => ReportFormat::Pdf,
                "Excel" => ReportFormat::Excel,
                _ => ReportFormat::Json,
            });
        })
    };

    let on_generate = {
        let api_client = api_client.clone();
        let report_type = report_type.clone();
        let format = format.clone();
        let recent = recent.clone();
        let generating = generating.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api_client = api_client.clone();
            let request = GenerateReportRequest {
                report_type: *report_type,
                format: *format,
            };
            let recent = recent.clone();
            let generating = generating.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            spawn_local(async move {
                generating.set(true);
                error_message.set(None);
                success_message.set(None);

                match api_client.generate_report(&request).await {
                    Ok(response) => {
                        success_message.set(Some(response.msg));
                        let mut reports = (*recent).clone();
                        reports.insert(0, response.report);
                        recent.set(reports);
                    }
                    Err(e) => {
                        // A 501 for PDF/Excel comes through here verbatim.
                        Logger::error_with_component("reports", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                generating.set(false);
            });
        })
    };

    let on_threshold_change = {
        let threshold = threshold.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            threshold.set(input.value());
        })
    };

    let run_status_report = {
        let api_client = api_client.clone();
        let threshold = threshold.clone();
        let status_report = status_report.clone();
        let status_loading = status_loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api_client = api_client.clone();
            let threshold_value: f64 = (*threshold).trim().parse().unwrap_or(0.0);
            let status_report = status_report.clone();
            let status_loading = status_loading.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                status_loading.set(true);

                match api_client.status_report(threshold_value).await {
                    Ok(response) => status_report.set(Some(response)),
                    Err(e) => {
                        Logger::error_with_component("reports", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                status_loading.set(false);
            });
        })
    };

    let export_summary_json = {
        let summary = summary.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(summary) = (*summary).clone() {
                if let Err(e) = download::download_json("finance-summary.json", &summary) {
                    Logger::error_with_component("reports", &format!("export failed: {}", e));
                }
            }
        })
    };

    let export_summary_csv = {
        let summary = summary.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(summary) = (*summary).clone() {
                let rows = vec![vec![
                    summary.total_students.to_string(),
                    format!("{:.2}", summary.total_payments),
                    format!("{:.2}", summary.total_outstanding),
                    summary.unpaid_students.to_string(),
                    summary.partial_students.to_string(),
                    summary.paid_students.to_string(),
                ]];
                if let Err(e) = download::download_csv(
                    "finance-summary.csv",
                    &[
                        "total_students",
                        "total_payments",
                        "total_outstanding",
                        "unpaid",
                        "partial",
                        "paid",
                    ],
                    &rows,
                ) {
                    Logger::error_with_component("reports", &format!("export failed: {}", e));
                }
            }
        })
    };

    html! {
        <div class="page">
            <h1>{"Reports"}</h1>

            {if let Some(error) = (*error_message).clone() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            {if let Some(message) = (*success_message).clone() {
                html! { <div class="form-message success">{message}</div> }
            } else {
                html! {}
            }}

            <section class="page-section">
                <h2>{"Generate a report"}</h2>
                <form class="report-form" onsubmit={on_generate}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="report-type">{"Report"}</label>
                            <select id="report-type" onchange={on_type_change} disabled={*generating}>
                                {for REPORT_TYPES.iter().map(|t| {
                                    html! {
                                        <option value={type_value(*t)} selected={*report_type == *t}>
                                            {t.label()}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="report-format">{"Format"}</label>
                            <select id="report-format" onchange={on_format_change} disabled={*generating}>
                                {for FORMATS.iter().map(|f| {
                                    let label = if f.is_implemented() {
                                        f.label().to_string()
                                    } else {
                                        format!("{} (server pending)", f.label())
                                    };
                                    html! {
                                        <option value={f.label()} selected={*format == *f}>{label}</option>
                                    }
                                })}
                            </select>
                        </div>

                        <button type="submit" class="btn btn-primary" disabled={*generating}>
                            {if *generating { "Generating..." } else { "Generate" }}
                        </button>
                    </div>
                </form>
            </section>

            {if summary.is_some() {
                html! {
                    <section class="page-section">
                        <h2>{"Quick export"}</h2>
                        <p class="section-hint">
                            {"Download the current finance snapshot, serialized in your browser."}
                        </p>
                        <div class="form-buttons">
                            <button class="btn btn-secondary" onclick={export_summary_json}>{"Summary as JSON"}</button>
                            <button class="btn btn-secondary" onclick={export_summary_csv}>{"Summary as CSV"}</button>
                        </div>
                    </section>
                }
            } else {
                html! {}
            }}

            <section class="page-section">
                <h2>{"Pass/fail status report"}</h2>
                <p class="section-hint">
                    {"Students pass when their dues are at or below the threshold."}
                </p>
                <form class="report-form" onsubmit={run_status_report}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="status-threshold">{"Dues threshold"}</label>
                            <input
                                id="status-threshold"
                                type="number"
                                min="0"
                                step="0.01"
                                value={(*threshold).clone()}
                                onchange={on_threshold_change}
                                disabled={*status_loading}
                            />
                        </div>
                        <button type="submit" class="btn btn-secondary" disabled={*status_loading}>
                            {if *status_loading { "Running..." } else { "Run" }}
                        </button>
                    </div>
                </form>

                {if let Some(report) = status_report.as_ref() {
                    html! {
                        <>
                            <p class="section-hint">
                                {format!(
                                    "{} students: {} pass, {} fail (threshold {}).",
                                    report.total_students,
                                    report.pass_count,
                                    report.fail_count,
                                    format_money(report.threshold)
                                )}
                            </p>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{"Student"}</th>
                                        <th>{"Dues"}</th>
                                        <th>{"Total fees"}</th>
                                        <th>{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for report.entries.iter().map(|entry| {
                                        html! {
                                            <tr>
                                                <td>{format!("{} ({})", entry.student.name, entry.student.student_number)}</td>
                                                <td>{format_money(entry.student.dues_balance)}</td>
                                                <td>{format_money(entry.total_fees)}</td>
                                                <td>{pass_fail_badge(entry.status)}</td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </>
                    }
                } else {
                    html! {}
                }}
            </section>

            <section class="page-section">
                <h2>{"Recent reports"}</h2>

                {if *recent_loading {
                    html! { <div class="loading">{"Loading recent reports..."}</div> }
                } else if recent.is_empty() {
                    html! { <div class="empty-state">{"No reports generated yet."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Report"}</th>
                                    <th>{"Format"}</th>
                                    <th>{"Generated"}</th>
                                    <th>{"Rows"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for recent.iter().map(|report| {
                                    html! {
                                        <tr>
                                            <td>{report.report_type.label()}</td>
                                            <td>{report.format.label()}</td>
                                            <td>{format_date(&report.generated_at)}</td>
                                            <td>{report.row_count}</td>
                                            <td>
                                                <a
                                                    class="btn btn-secondary btn-small"
                                                    href={report.download_url.clone()}
                                                    target="_blank"
                                                >
                                                    {"Download"}
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            {if let Some(summary) = summary.as_ref() {
                html! {
                    <div class="section-hint">
                        {format!(
                            "Snapshot: {} students, {} outstanding.",
                            summary.total_students,
                            format_money(summary.total_outstanding)
                        )}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
