use shared::{
    format_money, Course, EnrollRequest, Enrollment, EnrollmentStatus, StudentStatusResponse,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::modals::ConfirmModal;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(CourseRegistration)]
pub fn course_registration() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let courses = use_state(Vec::<Course>::new);
    let status = use_state(|| None::<StudentStatusResponse>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let enrolling_course = use_state(|| None::<i64>);
    let drop_candidate = use_state(|| None::<Enrollment>);
    let dropping = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let courses = courses.clone();
        let status = status.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let courses = courses.clone();
            let status = status.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                loading.set(true);

                // The two fetches are independent; either can fail alone.
                match api_client.list_courses().await {
                    Ok(response) => courses.set(response.courses),
                    Err(e) => {
                        Logger::error_with_component("course-registration", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                match api_client.student_status().await {
                    Ok(response) => status.set(Some(response)),
                    Err(e) => {
                        Logger::error_with_component("course-registration", &e.to_string());
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

    let enroll = {
        let api_client = api_client.clone();
        let enrolling_course = enrolling_course.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();

        Callback::from(move |course_id: i64| {
            let api_client = api_client.clone();
            let enrolling_course = enrolling_course.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let show_success = show_success.clone();

            spawn_local(async move {
                enrolling_course.set(Some(course_id));
                error_message.set(None);

                match api_client.enroll(&EnrollRequest { course_id }).await {
                    Ok(response) => {
                        show_success.emit(response.msg);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("course-registration", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                enrolling_course.set(None);
            });
        })
    };

    let confirm_drop = {
        let api_client = api_client.clone();
        let drop_candidate = drop_candidate.clone();
        let dropping = dropping.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();

        Callback::from(move |_| {
            let Some(enrollment) = (*drop_candidate).clone() else {
                return;
            };

            let api_client = api_client.clone();
            let drop_candidate = drop_candidate.clone();
            let dropping = dropping.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let show_success = show_success.clone();

            spawn_local(async move {
                dropping.set(true);
                error_message.set(None);

                match api_client.drop_enrollment(enrollment.id).await {
                    Ok(response) => {
                        show_success.emit(response.msg);
                        drop_candidate.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("course-registration", &e.to_string());
                        error_message.set(Some(e.to_string()));
                        drop_candidate.set(None);
                    }
                }

                dropping.set(false);
            });
        })
    };

    let close_drop_modal = {
        let drop_candidate = drop_candidate.clone();
        Callback::from(move |_| drop_candidate.set(None))
    };

    if *loading {
        return html! { <div class="loading">{"Loading courses..."}</div> };
    }

    let blocked = status
        .as_ref()
        .map(|s| s.student.blocked)
        .unwrap_or(false);
    let active_enrollments: Vec<Enrollment> = status
        .as_ref()
        .map(|s| {
            s.enrollments
                .iter()
                .filter(|e| e.status == EnrollmentStatus::Active)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let enrolled_course_ids: Vec<i64> = active_enrollments.iter().map(|e| e.course_id).collect();
    let total_credits: u32 = active_enrollments.iter().map(|e| e.credits).sum();
    let total_fees: f64 = active_enrollments.iter().map(|e| e.fee).sum();

    let drop_message = drop_candidate
        .as_ref()
        .map(|e| {
            format!(
                "Drop {} - {}? The course fee of {} will be removed from your dues.",
                e.course_code,
                e.course_name,
                format_money(e.fee)
            )
        })
        .unwrap_or_default();

    html! {
        <div class="page">
            <h1>{"Course Registration"}</h1>

            {if blocked {
                html! {
                    <div class="form-message warning">
                        {"Your account is blocked: registration changes are disabled until your dues are settled."}
                    </div>
                }
            } else {
                html! {}
            }}

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
                <h2>{"My enrollments"}</h2>
                {if active_enrollments.is_empty() {
                    html! { <div class="empty-state">{"You are not enrolled in any course."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Course"}</th>
                                    <th>{"Credits"}</th>
                                    <th>{"Fee"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for active_enrollments.iter().map(|enrollment| {
                                    let drop_candidate = drop_candidate.clone();
                                    let entry = enrollment.clone();
                                    html! {
                                        <tr>
                                            <td>{format!("{} - {}", enrollment.course_code, enrollment.course_name)}</td>
                                            <td>{enrollment.credits}</td>
                                            <td>{format_money(enrollment.fee)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-danger btn-small"
                                                    disabled={blocked}
                                                    onclick={Callback::from(move |_| drop_candidate.set(Some(entry.clone())))}
                                                >
                                                    {"Drop"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td>{"Total"}</td>
                                    <td>{total_credits}</td>
                                    <td>{format_money(total_fees)}</td>
                                    <td></td>
                                </tr>
                            </tfoot>
                        </table>
                    }
                }}
            </section>

            <section class="page-section">
                <h2>{"Available courses"}</h2>
                {if courses.is_empty() {
                    html! { <div class="empty-state">{"No courses are open for registration in your faculty."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Course"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Credits"}</th>
                                    <th>{"Fee"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for courses.iter().map(|course| {
                                    let already_enrolled = enrolled_course_ids.contains(&course.id);
                                    let busy = *enrolling_course == Some(course.id);
                                    let enroll = enroll.clone();
                                    let course_id = course.id;
                                    html! {
                                        <tr>
                                            <td>{format!("{} - {}", course.course_code, course.name)}</td>
                                            <td>{&course.description}</td>
                                            <td>{course.credits}</td>
                                            <td>{format_money(course.total_fee)}</td>
                                            <td>
                                                {if already_enrolled {
                                                    html! { <span class="badge badge-neutral">{"Enrolled"}</span> }
                                                } else {
                                                    html! {
                                                        <button
                                                            class="btn btn-primary btn-small"
                                                            disabled={blocked || busy}
                                                            onclick={Callback::from(move |_| enroll.emit(course_id))}
                                                        >
                                                            {if busy { "Enrolling..." } else { "Enroll" }}
                                                        </button>
                                                    }
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <ConfirmModal
                is_open={drop_candidate.is_some()}
                title={"Drop course".to_string()}
                message={drop_message}
                confirm_label={"Drop course".to_string()}
                on_confirm={confirm_drop}
                on_close={close_drop_modal}
                busy={*dropping}
            />
        </div>
    }
}
