use leptos::*;
use report_core::admin::AdminSummary;

#[component]
pub fn AdminView() -> impl IntoView {
    let summary = AdminSummary::demo();

    view! {
      <div class="portal-section">
        <h2 class="section-title">"Admin Dashboard"</h2>

        <div class="stats-grid">
          {summary
              .stats
              .into_iter()
              .map(|stat| {
                  view! {
                    <div class="stat-card">
                      <p class="stat-label">{stat.label}</p>
                      <p class="stat-value">{stat.value}</p>
                    </div>
                  }
              })
              .collect_view()}
        </div>

        <div class="issue-section">
          <h2 class="section-title">"Issue Management"</h2>
          <div class="issue-list">
            {summary
                .spotlight
                .into_iter()
                .map(|issue| {
                    view! {
                      <div class="issue-card">
                        <h3 class="issue-title">{issue.title}</h3>
                        <span class=format!("status-badge {}", issue.status.css_class())>
                          {issue.status.label()}
                        </span>
                        <p class="issue-description">{issue.description}</p>
                        <div class="issue-meta">
                          <span>{issue.time_ago}</span>
                          <span>{issue.category}</span>
                        </div>
                      </div>
                    }
                })
                .collect_view()}
          </div>
        </div>
      </div>
    }
}
