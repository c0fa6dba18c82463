use crate::components::{AdminView, CitizenView, StaffView, Toast};
use crate::notify::Notifier;
use leptos::*;
use report_core::notice::NoticeBoard;
use report_core::shell::{RoleView, Shell};

#[component]
pub fn App() -> impl IntoView {
    let shell = create_rw_signal(Shell::demo());
    let board = create_rw_signal(NoticeBoard::new());
    let notifier = Notifier::new(board);

    provide_context(shell);
    provide_context(notifier);

    let active = move || shell.with(|s| s.active);

    view! {
      <div class="app">
        <header>
          <h1>"FixItNow"</h1>
          <div class="header-buttons">
            {RoleView::ALL
                .into_iter()
                .map(|role| {
                    view! {
                      <button
                        class=move || if active() == role { "active-btn" } else { "" }
                        on:click=move |_| shell.update(|s| s.switch_to(role))
                      >
                        {role.label()}
                      </button>
                    }
                })
                .collect_view()}
          </div>
        </header>

        <main>
          {move || match active() {
              RoleView::Citizen => view! { <CitizenView/> }.into_view(),
              RoleView::Admin => view! { <AdminView/> }.into_view(),
              RoleView::Staff => view! { <StaffView/> }.into_view(),
          }}
        </main>

        <Toast board=board/>
      </div>
    }
}
