use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{DashboardLayout, FinanceLayout};
use crate::context::AuthProvider;
use crate::hooks::use_auth;
use crate::pages::{
    BankReconciliation, CourseRegistration, FeeCalculation, FinanceDashboard, Home, Login,
    MakePayment, PaymentHistory, PaymentReceipt, Reports, StudentDashboard, StudentList,
    UnpaidStudents,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    StudentDashboard,
    #[at("/courses")]
    CourseRegistration,
    #[at("/pay")]
    MakePayment,
    #[at("/payments/:id/receipt")]
    PaymentReceipt { id: i64 },
    #[at("/payments")]
    PaymentHistory,
    #[at("/finance")]
    FinanceDashboard,
    #[at("/finance/students")]
    StudentList,
    #[at("/finance/unpaid")]
    UnpaidStudents,
    #[at("/finance/fees")]
    FeeCalculation,
    #[at("/finance/reconciliation")]
    BankReconciliation,
    #[at("/finance/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    pub children: Html,
}

/// Route gate: anything behind it requires a signed-in user.
#[function_component(RequireAuth)]
fn require_auth(props: &GuardProps) -> Html {
    let auth = use_auth();
    if auth.is_authenticated() {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

/// Route gate for finance staff. Signed-in students are sent back to their
/// own dashboard rather than an error page.
#[function_component(RequireFinance)]
fn require_finance(props: &GuardProps) -> Html {
    let auth = use_auth();
    if !auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    if auth.is_finance() {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::StudentDashboard} /> }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="page-centered">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to the portal"}</Link<Route>>
        </div>
    }
}

fn student_page(page: Html) -> Html {
    html! {
        <RequireAuth>
            <DashboardLayout>{page}</DashboardLayout>
        </RequireAuth>
    }
}

fn finance_page(page: Html) -> Html {
    html! {
        <RequireFinance>
            <FinanceLayout>{page}</FinanceLayout>
        </RequireFinance>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::StudentDashboard => student_page(html! { <StudentDashboard /> }),
        Route::CourseRegistration => student_page(html! { <CourseRegistration /> }),
        Route::MakePayment => student_page(html! { <MakePayment /> }),
        Route::PaymentReceipt { id } => student_page(html! { <PaymentReceipt {id} /> }),
        Route::PaymentHistory => student_page(html! { <PaymentHistory /> }),
        Route::FinanceDashboard => finance_page(html! { <FinanceDashboard /> }),
        Route::StudentList => finance_page(html! { <StudentList /> }),
        Route::UnpaidStudents => finance_page(html! { <UnpaidStudents /> }),
        Route::FeeCalculation => finance_page(html! { <FeeCalculation /> }),
        Route::BankReconciliation => finance_page(html! { <BankReconciliation /> }),
        Route::Reports => finance_page(html! { <Reports /> }),
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AuthProvider>
    }
}
