//! Role dashboards. Thin consumers of the session core: each panel
//! composes the forms and lists its role is entitled to.

use leptos::prelude::*;

use crate::components::company_form::CompanyForm;
use crate::components::employee_form::EmployeeForm;
use crate::components::expense_form::ExpenseForm;
use crate::components::expense_list::ExpenseList;
use crate::net::ApiConfig;
use crate::net::types::PeriodFilter;
use crate::net::{approval_api, company_api, expense_api};
use crate::state::session::SessionState;

/// Company domain for the signed-in user, taken from the email host.
fn company_domain(session: &SessionState) -> String {
    session
        .profile()
        .and_then(|p| p.email.split('@').nth(1).map(str::to_owned))
        .unwrap_or_default()
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();
    let domain = company_domain(&session);

    let company = LocalResource::new({
        let session = session.clone();
        let base = config.company_base.clone();
        let domain = domain.clone();
        move || {
            let base = base.clone();
            let domain = domain.clone();
            let token = session.access_token().unwrap_or_default();
            async move {
                company_api::fetch_company_by_domain(&base, &domain, &token)
                    .await
                    .ok()
            }
        }
    });

    view! {
        <section class="panel panel--admin">
            <h1>"Admin dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading company..."</p> }>
                {move || {
                    company
                        .get()
                        .map(|record| match record {
                            Some(c) => {
                                view! {
                                    <p class="panel__company">
                                        {format!("{} ({})", c.name, c.domain_name)}
                                    </p>
                                }
                                    .into_any()
                            }
                            None => view! { <p class="panel__company">"No company registered yet."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
            <CompanyForm/>
            <EmployeeForm/>
            <ExpenseForm company_domain=domain/>
            <ExpenseList/>
        </section>
    }
}

#[component]
pub fn EmployeePanel() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let domain = company_domain(&session);

    view! {
        <section class="panel panel--employee">
            <h1>"Employee dashboard"</h1>
            <ExpenseForm company_domain=domain/>
            <ExpenseList/>
        </section>
    }
}

#[component]
pub fn ManagerPanel() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();
    let domain = company_domain(&session);

    let approvals = LocalResource::new({
        let session = session.clone();
        let base = config.approval_base.clone();
        move || {
            let base = base.clone();
            let domain = domain.clone();
            let token = session.access_token().unwrap_or_default();
            async move {
                approval_api::fetch_approvals(&base, &domain, &PeriodFilter::default(), &token)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    view! {
        <section class="panel panel--manager">
            <h1>"Manager dashboard"</h1>
            <h2>"Pending approvals"</h2>
            <Suspense fallback=move || view! { <p>"Loading approvals..."</p> }>
                {move || {
                    approvals
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="panel__approvals">
                                    {list
                                        .into_iter()
                                        .map(|a| {
                                            view! {
                                                <li>
                                                    {format!(
                                                        "expense #{}: {}",
                                                        a.expense_id,
                                                        a.status,
                                                    )}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>
            <ExpenseList/>
        </section>
    }
}

#[component]
pub fn FinancePanel() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();
    let domain = company_domain(&session);

    let start_year = RwSignal::new(String::new());
    let end_year = RwSignal::new(String::new());
    let start_month = RwSignal::new(String::new());
    let end_month = RwSignal::new(String::new());
    let message = RwSignal::new(Option::<String>::None);

    let on_invoice = {
        let session = session.clone();
        let base = config.expense_base.clone();
        let domain = domain.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let filter = PeriodFilter {
                start_year: start_year.get_untracked().trim().parse().ok(),
                end_year: end_year.get_untracked().trim().parse().ok(),
                start_month: start_month.get_untracked().trim().parse().ok(),
                end_month: end_month.get_untracked().trim().parse().ok(),
            };
            if let (Some(from), Some(to)) = (filter.start_year, filter.end_year) {
                if from > to {
                    message.set(Some("Start year cannot exceed end year.".to_owned()));
                    return;
                }
            }
            let base = base.clone();
            let domain = domain.clone();
            let token = session.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match expense_api::generate_invoice(&base, &domain, &filter, &token).await {
                    Ok(bytes) => match download_pdf(&bytes, "expense-invoice.pdf") {
                        Ok(()) => {
                            let _ = message.try_set(Some("Invoice downloaded.".to_owned()));
                        }
                        Err(err) => {
                            let _ = message.try_set(Some(err));
                        }
                    },
                    Err(err) => {
                        let _ = message.try_set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <section class="panel panel--finance">
            <h1>"Finance dashboard"</h1>
            <form class="panel__invoice-form" on:submit=on_invoice>
                <h2>"Generate invoice"</h2>
                <label>
                    "Start year"
                    <input
                        type="number"
                        prop:value=move || start_year.get()
                        on:input=move |ev| start_year.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End year"
                    <input
                        type="number"
                        prop:value=move || end_year.get()
                        on:input=move |ev| end_year.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Start month"
                    <input
                        type="number"
                        min="1"
                        max="12"
                        prop:value=move || start_month.get()
                        on:input=move |ev| start_month.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End month"
                    <input
                        type="number"
                        min="1"
                        max="12"
                        prop:value=move || end_month.get()
                        on:input=move |ev| end_month.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Generate invoice"
                </button>
            </form>
            {move || message.get().map(|m| view! { <p class="panel__message">{m}</p> })}
            <ExpenseList/>
        </section>
    }
}

/// Hand a generated PDF to the browser as a named file download via a
/// temporary object URL.
fn download_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let link: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into()
            .map_err(|_| "anchor element".to_owned())?;
        link.set_href(&url);
        link.set_download(file_name);
        link.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, file_name);
        Err("not available outside the browser".to_owned())
    }
}
