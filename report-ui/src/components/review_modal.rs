use crate::capture::camera::CameraSession;
use crate::capture::upload;
use crate::notify::Notifier;
use leptos::html;
use leptos::*;
use report_core::item::Status;
use report_core::review::ReviewDialog;
use report_core::shell::Shell;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

/// Staged-edit overlay for one staff task. Every edit lands on the
/// dialog's staged copy; the list is only touched by "Update Task".
#[component]
pub fn ReviewModal(dialog: RwSignal<ReviewDialog>) -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let notifier = expect_context::<Notifier>();

    let camera_open = create_rw_signal(false);
    let camera = store_value(None::<CameraSession>);
    let video_ref = create_node_ref::<html::Video>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let staged_title =
        move || dialog.with(|d| d.staged().map(|s| s.title.clone()).unwrap_or_default());
    let staged_category =
        move || dialog.with(|d| d.staged().map(|s| s.category.clone()).unwrap_or_default());
    let staged_description =
        move || dialog.with(|d| d.staged().map(|s| s.description.clone()).unwrap_or_default());
    let staged_status =
        move || dialog.with(|d| d.staged().map(|s| s.status).unwrap_or(Status::Pending));
    let staged_proof = move || dialog.with(|d| d.staged().and_then(|s| s.proof.clone()));

    let close = move |_| {
        camera.set_value(None);
        camera_open.set(false);
        dialog.update(|d| d.cancel());
    };

    let commit = move |_| {
        camera.set_value(None);
        camera_open.set(false);
        let mut review = dialog.get_untracked();
        let outcome = shell
            .try_update(|s| review.confirm(&mut s.staff))
            .unwrap_or_else(|| Err("state unavailable".to_string()));
        dialog.set(review);
        match outcome {
            Ok(()) => notifier.notify("Status updated successfully!"),
            Err(err) => {
                log::error!("task update failed: {err}");
                notifier.notify("Could not update the task.");
            }
        }
    };

    let open_camera = move |_| {
        camera.set_value(None);
        camera_open.set(true);
        spawn_local(async move {
            match CameraSession::open().await {
                Ok(session) => {
                    if !camera_open.get_untracked() {
                        return;
                    }
                    if let Some(video) = video_ref.get_untracked() {
                        session.attach(&video);
                    }
                    camera.set_value(Some(session));
                }
                Err(err) => {
                    log::warn!("camera acquisition failed: {err}");
                    camera_open.set(false);
                    notifier.notify("Camera access denied or unavailable.");
                }
            }
        });
    };

    let capture_proof = move |_| {
        let shot = camera.with_value(|slot| {
            let session = slot.as_ref()?;
            let video = video_ref.get_untracked()?;
            let canvas = canvas_ref.get_untracked()?;
            Some(session.snapshot(&video, &canvas))
        });
        camera.set_value(None);
        camera_open.set(false);
        match shot {
            Some(Ok(image)) => {
                dialog.update(|d| d.set_proof(Some(image)));
                notifier.notify("Proof captured!");
            }
            Some(Err(err)) => {
                log::warn!("frame capture failed: {err}");
                notifier.notify("Could not capture a photo.");
            }
            None => {}
        }
    };

    view! {
      <div class="modal-overlay" on:click=close>
        <div class="modal-content" on:click=|ev| ev.stop_propagation()>
          <h3 class="modal-title">{staged_title}</h3>
          <p><strong>"Location: "</strong>{staged_category}</p>
          <p><strong>"Details: "</strong>{staged_description}</p>

          <div class="field">
            <label>"Status:"</label>
            <select
              prop:value=move || staged_status().label().to_string()
              on:change=move |ev| {
                  if let Some(status) = Status::parse(&event_target_value(&ev)) {
                      dialog.update(|d| d.set_status(status));
                  }
              }
            >
              {Status::ALL
                  .into_iter()
                  .map(|status| {
                      view! {
                        <option value=status.label() selected=move || staged_status() == status>
                          {status.label()}
                        </option>
                      }
                  })
                  .collect_view()}
            </select>
          </div>

          <div class="button-group">
            <label class="btn btn-secondary">
              "Upload Proof"
              <input
                type="file"
                accept="image/*"
                class="hidden-input"
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    let Some(file) = input.files().and_then(|files| files.get(0)) else {
                        return;
                    };
                    let read = upload::read_image(file, move |image| {
                        dialog.update(|d| d.set_proof(Some(image)));
                        notifier.notify("Proof uploaded!");
                    });
                    if let Err(err) = read {
                        log::warn!("proof upload failed: {err}");
                        notifier.notify("Could not read the selected file.");
                    }
                }
              />
            </label>
            <button class="btn btn-secondary" on:click=open_camera>"Open Camera"</button>
          </div>

          <Show when=move || camera_open.get() fallback=|| ()>
            <div class="camera-modal">
              <video class="camera-preview" node_ref=video_ref autoplay=true></video>
              <button class="btn btn-primary" on:click=capture_proof>"Capture"</button>
              <canvas class="hidden-canvas" node_ref=canvas_ref></canvas>
            </div>
          </Show>

          <Show when=move || staged_proof().is_some() fallback=|| ()>
            <div class="preview">
              <h4>"Proof Preview:"</h4>
              <img
                class="preview-image"
                src=move || staged_proof().map(|p| p.as_str().to_string()).unwrap_or_default()
              />
            </div>
          </Show>

          <div class="modal-buttons">
            <button class="btn btn-secondary" on:click=close>"Cancel"</button>
            <button class="btn btn-primary" on:click=commit>"Update Task"</button>
          </div>
        </div>
      </div>
    }
}
