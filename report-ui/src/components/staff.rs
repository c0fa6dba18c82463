use crate::components::ReviewModal;
use leptos::*;
use report_core::review::ReviewDialog;
use report_core::shell::Shell;

#[component]
pub fn StaffView() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let dialog = create_rw_signal(ReviewDialog::default());

    view! {
      <div class="portal-section">
        <h2 class="section-title">"Your Assigned Tasks"</h2>

        <div class="issue-list">
          <For
            each=move || shell.with(|s| s.staff.items().to_vec())
            key=|task| (task.id, task.status)
            children=move |task| {
                let staged = task.clone();
                view! {
                  <div class="task-card" on:click=move |_| dialog.update(|d| d.open(&staged))>
                    <h3 class="issue-title">{task.title.clone()}</h3>
                    <p class="issue-description">"Location: " {task.category.clone()}</p>
                    <span class=format!("status-badge {}", task.status.css_class())>
                      {task.status.label()}
                    </span>
                  </div>
                }
            }
          />
        </div>

        <Show when=move || dialog.with(|d| d.is_open()) fallback=|| ()>
          <ReviewModal dialog=dialog/>
        </Show>

        <div class="card analytics">
          <h2 class="section-title">"Task Status Analytics"</h2>
          {move || {
              let counts = shell.with(|s| s.staff.status_counts());
              let total = (counts.pending + counts.in_progress + counts.resolved).max(1);
              let rows = [
                  ("Pending", "chart-fill-pending", counts.pending),
                  ("In Progress", "chart-fill-in-progress", counts.in_progress),
                  ("Resolved", "chart-fill-resolved", counts.resolved),
              ];
              view! {
                <div class="status-chart">
                  {rows
                      .into_iter()
                      .map(|(label, fill_class, count)| {
                          let pct = count * 100 / total;
                          view! {
                            <div class="chart-row">
                              <span class="chart-label">{label}</span>
                              <div class="chart-track">
                                <div
                                  class=format!("chart-fill {fill_class}")
                                  style=format!("width: {pct}%")
                                ></div>
                              </div>
                              <span class="chart-count">{count}</span>
                            </div>
                          }
                      })
                      .collect_view()}
                </div>
              }
          }}
        </div>
      </div>
    }
}
