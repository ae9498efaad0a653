//! Expense entry form.

use leptos::prelude::*;

use crate::net::ApiConfig;
use crate::net::types::{ApprovalRequest, ExpenseDraft};
use crate::net::{approval_api, expense_api};
use crate::state::session::SessionState;

/// New-expense form. `company_domain` scopes the expense to the
/// signed-in user's company.
#[component]
pub fn ExpenseForm(#[prop(into)] company_domain: String) -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let expense_date = RwSignal::new(String::new());
    let message = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_amount) = amount.get_untracked().trim().parse::<f64>() else {
            message.set(Some("Amount must be a number.".to_owned()));
            return;
        };
        if parsed_amount <= 0.0 {
            message.set(Some("Amount must be positive.".to_owned()));
            return;
        }
        if title.get_untracked().trim().is_empty() || expense_date.get_untracked().is_empty() {
            message.set(Some("Title and date are required.".to_owned()));
            return;
        }

        let draft = ExpenseDraft {
            title: title.get_untracked().trim().to_owned(),
            description: description.get_untracked(),
            amount: parsed_amount,
            category: category.get_untracked(),
            expense_date: expense_date.get_untracked(),
            company_domain: company_domain.clone(),
        };
        let base = config.expense_base.clone();
        let approval_base = config.approval_base.clone();
        let token = session.access_token().unwrap_or_default();
        leptos::task::spawn_local(async move {
            match expense_api::submit_expense(&base, &draft, &token).await {
                Ok(record) => {
                    // Submitted expenses immediately enter the approval flow.
                    let request = ApprovalRequest {
                        expense_id: record.id,
                        company_domain: draft.company_domain.clone(),
                    };
                    if let Err(err) =
                        approval_api::ask_for_approval(&approval_base, &request, &token).await
                    {
                        log::warn!("approval request for expense {}: {err}", record.id);
                    }
                    let _ = message.try_set(Some("Expense submitted.".to_owned()));
                    title.set(String::new());
                    description.set(String::new());
                    amount.set(String::new());
                    category.set(String::new());
                    expense_date.set(String::new());
                }
                Err(err) => {
                    let _ = message.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form class="expense-form" on:submit=submit>
            <h2>"New expense"</h2>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Amount"
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Category"
                <input
                    type="text"
                    prop:value=move || category.get()
                    on:input=move |ev| category.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Date"
                <input
                    type="date"
                    prop:value=move || expense_date.get()
                    on:input=move |ev| expense_date.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit">
                "Submit expense"
            </button>
            {move || message.get().map(|m| view! { <p class="expense-form__message">{m}</p> })}
        </form>
    }
}
