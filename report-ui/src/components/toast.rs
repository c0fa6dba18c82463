use leptos::*;
use report_core::notice::NoticeBoard;

#[component]
pub fn Toast(board: RwSignal<NoticeBoard>) -> impl IntoView {
    view! {
      <Show when=move || board.with(|b| b.current().is_some()) fallback=|| ()>
        <div class="toast">
          {move || board.with(|b| b.current().map(|n| n.message.clone()).unwrap_or_default())}
        </div>
      </Show>
    }
}
