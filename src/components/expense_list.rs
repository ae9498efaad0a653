//! Expense table with per-row amount edit and delete.

use leptos::prelude::*;

use crate::net::ApiConfig;
use crate::net::expense_api;
use crate::net::types::ExpensePatch;
use crate::state::session::SessionState;

/// Lists every expense visible to the signed-in user.
#[component]
pub fn ExpenseList() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();

    let expenses = LocalResource::new({
        let session = session.clone();
        let base = config.expense_base.clone();
        move || {
            let base = base.clone();
            let token = session.access_token().unwrap_or_default();
            async move {
                expense_api::fetch_all_expenses(&base, &token)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    // Row currently being edited, with the amount text as typed.
    let editing = RwSignal::new(Option::<(i64, String)>::None);

    let on_delete = {
        let session = session.clone();
        let base = config.expense_base.clone();
        move |expense_id: i64| {
            let base = base.clone();
            let token = session.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match expense_api::delete_expense(&base, expense_id, &token).await {
                    Ok(()) => expenses.refetch(),
                    Err(err) => log::warn!("delete expense {expense_id}: {err}"),
                }
            });
        }
    };

    let on_save = {
        let session = session.clone();
        let base = config.expense_base.clone();
        move |expense_id: i64, raw_amount: String| {
            let Ok(amount) = raw_amount.trim().parse::<f64>() else {
                return;
            };
            if amount <= 0.0 {
                return;
            }
            let base = base.clone();
            let token = session.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                let patch = ExpensePatch {
                    amount: Some(amount),
                    ..ExpensePatch::default()
                };
                match expense_api::update_expense(&base, expense_id, &patch, &token).await {
                    Ok(_) => {
                        let _ = editing.try_set(None);
                        expenses.refetch();
                    }
                    Err(err) => log::warn!("update expense {expense_id}: {err}"),
                }
            });
        }
    };

    view! {
        <div class="expense-list">
            <h2>"Expenses"</h2>
            <Suspense fallback=move || view! { <p>"Loading expenses..."</p> }>
                {move || {
                    expenses
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="expense-list__empty">"No expenses yet."</p> }
                                    .into_any()
                            } else {
                                let on_delete = on_delete.clone();
                                let on_save = on_save.clone();
                                view! {
                                    <table class="expense-list__table">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
                                                <th>"Category"</th>
                                                <th>"Amount"</th>
                                                <th>"Date"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|e| {
                                                    let on_delete = on_delete.clone();
                                                    let on_save = on_save.clone();
                                                    let id = e.id;
                                                    let amount = e.amount;
                                                    view! {
                                                        <tr>
                                                            <td>{e.title}</td>
                                                            <td>{e.category}</td>
                                                            <td>
                                                                {move || match editing.get() {
                                                                    Some((edit_id, text)) if edit_id == id => {
                                                                        view! {
                                                                            <input
                                                                                type="number"
                                                                                step="0.01"
                                                                                prop:value=text
                                                                                on:input=move |ev| {
                                                                                    editing.set(Some((id, event_target_value(&ev))));
                                                                                }
                                                                            />
                                                                        }
                                                                            .into_any()
                                                                    }
                                                                    _ => format!("{amount:.2}").into_any(),
                                                                }}
                                                            </td>
                                                            <td>{e.expense_date}</td>
                                                            <td>{e.status.unwrap_or_default()}</td>
                                                            <td>
                                                                {move || {
                                                                    let on_save = on_save.clone();
                                                                    let on_delete = on_delete.clone();
                                                                    match editing.get() {
                                                                        Some((edit_id, text)) if edit_id == id => {
                                                                            view! {
                                                                                <button
                                                                                    class="btn btn--primary"
                                                                                    on:click=move |_| on_save(id, text.clone())
                                                                                >
                                                                                    "Save"
                                                                                </button>
                                                                                <button
                                                                                    class="btn"
                                                                                    on:click=move |_| editing.set(None)
                                                                                >
                                                                                    "Cancel"
                                                                                </button>
                                                                            }
                                                                                .into_any()
                                                                        }
                                                                        _ => {
                                                                            view! {
                                                                                <button
                                                                                    class="btn"
                                                                                    on:click=move |_| {
                                                                                        editing.set(Some((id, format!("{amount:.2}"))));
                                                                                    }
                                                                                >
                                                                                    "Edit"
                                                                                </button>
                                                                                <button
                                                                                    class="btn btn--danger"
                                                                                    on:click=move |_| on_delete(id)
                                                                                >
                                                                                    "Delete"
                                                                                </button>
                                                                            }
                                                                                .into_any()
                                                                        }
                                                                    }
                                                                }}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
