use shared::{
    filter_overdue, format_date, format_money, DuesSeverity, StudentActionKind, UnpaidReport,
    UnpaidStudent,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::modals::StudentActionModal;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::download;
use crate::services::logging::Logger;

#[function_component(UnpaidStudents)]
pub fn unpaid_students() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let report = use_state(|| None::<UnpaidReport>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let overdue_only = use_state(|| false);
    let overdue_days = use_state(|| "7".to_string());

    let action_target = use_state(|| None::<(StudentActionKind, UnpaidStudent)>);

    let refresh = {
        let api_client = api_client.clone();
        let report = report.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let report = report.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                loading.set(true);
                error_message.set(None);

                match api_client.unpaid_report().await {
                    Ok(response) => report.set(Some(response)),
                    Err(e) => {
                        Logger::error_with_component("unpaid-students", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let show_success = {
        let success_message = success_message.clone();
        Callback::from(move |message: String| {
            success_message.set(Some(message));
            let success_message = success_message.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(3000).await;
                success_message.set(None);
            });
        })
    };

    let on_overdue_only_change = {
        let overdue_only = overdue_only.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            overdue_only.set(input.checked());
        })
    };

    let on_days_change = {
        let overdue_days = overdue_days.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            overdue_days.set(input.value());
        })
    };

    let open_action = {
        let action_target = action_target.clone();
        Callback::from(move |target: (StudentActionKind, UnpaidStudent)| {
            action_target.set(Some(target));
        })
    };

    let on_action_success = {
        let action_target = action_target.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();
        Callback::from(move |response: shared::StudentActionResponse| {
            action_target.set(None);
            show_success.emit(response.msg);
            refresh.emit(());
        })
    };

    let close_action = {
        let action_target = action_target.clone();
        Callback::from(move |_| action_target.set(None))
    };

    let threshold: u32 = (*overdue_days).trim().parse().unwrap_or(7);
    let visible: Vec<UnpaidStudent> = match report.as_ref() {
        Some(report) if *overdue_only => filter_overdue(&report.students, threshold),
        Some(report) => report.students.clone(),
        None => Vec::new(),
    };

    let export_csv = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            let rows: Vec<Vec<String>> = visible
                .iter()
                .map(|row| {
                    vec![
                        row.student.student_number.clone(),
                        row.student.name.clone(),
                        row.student.faculty.clone(),
                        format!("{:.2}", row.student.dues_balance),
                        row.severity.label().to_string(),
                        row.days_overdue.to_string(),
                    ]
                })
                .collect();

            if let Err(e) = download::download_csv(
                "unpaid-students.csv",
                &["student", "name", "faculty", "dues", "severity", "days_overdue"],
                &rows,
            ) {
                Logger::error_with_component("unpaid-students", &format!("export failed: {}", e));
            }
        })
    };

    let bucket_counts = |severity: DuesSeverity| -> usize {
        visible.iter().filter(|r| r.severity == severity).count()
    };

    let severity_section = |severity: DuesSeverity| -> Html {
        let rows: Vec<&UnpaidStudent> =
            visible.iter().filter(|r| r.severity == severity).collect();
        if rows.is_empty() {
            return html! {};
        }

        html! {
            <section class="page-section">
                <h2>{format!("{} ({})", severity.label(), rows.len())}</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Student"}</th>
                            <th>{"Faculty"}</th>
                            <th>{"Dues"}</th>
                            <th>{"Days overdue"}</th>
                            <th>{"Last payment"}</th>
                            <th>{"Enrollments"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.into_iter().map(|row| {
                            let open_action = open_action.clone();
                            let contact = row.clone();
                            let penalty = row.clone();
                            let block = row.clone();
                            let open_contact = {
                                let open_action = open_action.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open_action.emit((StudentActionKind::Contact, contact.clone()))
                                })
                            };
                            let open_penalty = {
                                let open_action = open_action.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open_action.emit((StudentActionKind::Penalty, penalty.clone()))
                                })
                            };
                            let open_block = Callback::from(move |_: MouseEvent| {
                                open_action.emit((StudentActionKind::Block, block.clone()))
                            });

                            html! {
                                <tr>
                                    <td>{format!("{} ({})", row.student.name, row.student.student_number)}</td>
                                    <td>{&row.student.faculty}</td>
                                    <td>{format_money(row.student.dues_balance)}</td>
                                    <td>{row.days_overdue}</td>
                                    <td>
                                        {row.last_payment_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "Never".to_string())}
                                    </td>
                                    <td>{row.total_enrollments}</td>
                                    <td class="row-actions">
                                        <button class="btn btn-secondary btn-small" onclick={open_contact}>{"Contact"}</button>
                                        <button class="btn btn-secondary btn-small" onclick={open_penalty}>{"Penalty"}</button>
                                        <button
                                            class="btn btn-danger btn-small"
                                            onclick={open_block}
                                            disabled={row.student.blocked}
                                        >
                                            {"Block"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </section>
        }
    };

    html! {
        <div class="page">
            <div class="section-header">
                <h1>{"Unpaid Students"}</h1>
                <button class="btn btn-secondary" onclick={export_csv} disabled={visible.is_empty()}>
                    {"Export CSV"}
                </button>
            </div>

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

            {if let Some(report) = report.as_ref() {
                html! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-label">{"Report date"}</span>
                            <span class="stat-value">{format_date(&report.report_date)}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">{"Students with dues"}</span>
                            <span class="stat-value">{report.total_students}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">{"Total outstanding"}</span>
                            <span class="stat-value">{format_money(report.total_outstanding)}</span>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            <section class="filter-panel">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={*overdue_only}
                        onchange={on_overdue_only_change}
                    />
                    {"Only show students overdue more than"}
                </label>
                <input
                    class="days-input"
                    type="number"
                    min="0"
                    step="1"
                    value={(*overdue_days).clone()}
                    onchange={on_days_change}
                    disabled={!*overdue_only}
                />
                <span>{"days"}</span>
                <div class="filter-summary">
                    {format!(
                        "{} critical, {} moderate, {} low",
                        bucket_counts(DuesSeverity::Critical),
                        bucket_counts(DuesSeverity::Moderate),
                        bucket_counts(DuesSeverity::Low)
                    )}
                </div>
            </section>

            {if *loading {
                html! { <div class="loading">{"Loading unpaid report..."}</div> }
            } else if visible.is_empty() {
                html! { <div class="empty-state">{"No unpaid students in this view."}</div> }
            } else {
                html! {
                    <>
                        {severity_section(DuesSeverity::Critical)}
                        {severity_section(DuesSeverity::Moderate)}
                        {severity_section(DuesSeverity::Low)}
                    </>
                }
            }}

            <StudentActionModal
                is_open={action_target.is_some()}
                kind={action_target.as_ref().map(|(kind, _)| *kind).unwrap_or(StudentActionKind::Contact)}
                student={action_target.as_ref().map(|(_, row)| row.student.clone())}
                api_client={api_client}
                on_success={on_action_success}
                on_close={close_action}
            />
        </div>
    }
}
