use shared::{DuesSeverity, FeesStatus, MatchStatus, PassFail, PaymentStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub label: String,
    pub tone: String,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! { <span class={format!("badge badge-{}", props.tone)}>{&props.label}</span> }
}

pub fn payment_status_badge(status: PaymentStatus) -> Html {
    let tone = match status {
        PaymentStatus::Received => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::Failed => "danger",
    };
    html! { <Badge label={status.label().to_string()} tone={tone.to_string()} /> }
}

pub fn fees_status_badge(status: FeesStatus) -> Html {
    let tone = match status {
        FeesStatus::Paid => "success",
        FeesStatus::Partial => "warning",
        FeesStatus::Unpaid => "danger",
    };
    html! { <Badge label={status.label().to_string()} tone={tone.to_string()} /> }
}

pub fn match_status_badge(status: MatchStatus) -> Html {
    let tone = match status {
        MatchStatus::Matched => "success",
        MatchStatus::Pending => "warning",
        MatchStatus::Unmatched => "danger",
    };
    html! { <Badge label={status.label().to_string()} tone={tone.to_string()} /> }
}

pub fn pass_fail_badge(status: PassFail) -> Html {
    let (label, tone) = match status {
        PassFail::Pass => ("Pass", "success"),
        PassFail::Fail => ("Fail", "danger"),
    };
    html! { <Badge label={label.to_string()} tone={tone.to_string()} /> }
}

pub fn severity_badge(severity: DuesSeverity) -> Html {
    let tone = match severity {
        DuesSeverity::Critical => "danger",
        DuesSeverity::Moderate => "warning",
        DuesSeverity::Low => "neutral",
    };
    html! { <Badge label={severity.label().to_string()} tone={tone.to_string()} /> }
}
