use crate::capture::camera::CameraSession;
use crate::capture::speech::SpeechSession;
use crate::capture::upload;
use crate::notify::Notifier;
use leptos::html;
use leptos::*;
use report_core::item::EncodedImage;
use report_core::list::Draft;
use report_core::shell::Shell;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

#[component]
pub fn CitizenView() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let notifier = expect_context::<Notifier>();

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let attachment = create_rw_signal(None::<EncodedImage>);
    let camera_open = create_rw_signal(false);
    let recording = create_rw_signal(false);

    let camera = store_value(None::<CameraSession>);
    let speech_session = store_value(None::<SpeechSession>);

    let video_ref = create_node_ref::<html::Video>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let submit = move |_| {
        let draft = Draft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: "Citizen".to_string(),
            attachment: attachment.get_untracked(),
        };
        let outcome = shell
            .try_update(|s| s.citizen.submit(draft))
            .unwrap_or_else(|| Err("state unavailable".to_string()));
        match outcome {
            Ok(_) => {
                title.set(String::new());
                description.set(String::new());
                attachment.set(None);
                notifier.notify("Report submitted successfully!");
            }
            Err(message) => notifier.notify(message),
        }
    };

    let open_camera = move |_| {
        // Releasing the previous session first keeps at most one device
        // handle alive at a time.
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

    let capture_photo = move |_| {
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
                attachment.set(Some(image));
                notifier.notify("Photo captured!");
            }
            Some(Err(err)) => {
                log::warn!("frame capture failed: {err}");
                notifier.notify("Could not capture a photo.");
            }
            None => {}
        }
    };

    let toggle_voice = move |_| {
        if recording.get_untracked() {
            speech_session.set_value(None);
            recording.set(false);
            notifier.notify("Voice recording stopped.");
            return;
        }

        let on_transcript = move |utterance: String| {
            let utterance = utterance.trim().to_string();
            if utterance.is_empty() {
                return;
            }
            description.update(|text| {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(&utterance);
            });
        };
        let on_error = move |message: String| {
            log::warn!("{message}");
            notifier.notify(message);
            recording.set(false);
            spawn_local(async move {
                speech_session.set_value(None);
            });
        };
        let on_end = move || {
            recording.set(false);
            // The session owns the closure running this; release it a
            // tick later rather than mid-callback.
            spawn_local(async move {
                speech_session.set_value(None);
            });
        };

        match SpeechSession::start(on_transcript, on_error, on_end) {
            Ok(session) => {
                speech_session.set_value(Some(session));
                recording.set(true);
                notifier.notify("Listening...");
            }
            Err(message) => {
                log::warn!("voice capture unavailable: {message}");
                notifier.notify(message);
            }
        }
    };

    view! {
      <div class="portal-section">
        <h2 class="section-title">"Report an Issue"</h2>

        <div class="card">
          <input
            class="form-input"
            placeholder="Title (e.g., Water Leakage)"
            prop:value=move || title.get()
            on:input=move |ev| title.set(event_target_value(&ev))
          />

          <textarea
            class="form-textarea"
            placeholder="Describe the issue..."
            prop:value=move || description.get()
            on:input=move |ev| description.set(event_target_value(&ev))
          ></textarea>

          <div class="button-group">
            <label class="btn btn-secondary">
              "Upload Photo"
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
                        attachment.set(Some(image));
                    });
                    if let Err(err) = read {
                        log::warn!("photo upload failed: {err}");
                        notifier.notify("Could not read the selected file.");
                    }
                }
              />
            </label>

            <button class="btn btn-secondary" on:click=open_camera>"Open Camera"</button>

            <button class="btn btn-secondary" on:click=toggle_voice>
              {move || if recording.get() { "Stop Voice" } else { "Start Voice" }}
            </button>
          </div>

          <Show when=move || camera_open.get() fallback=|| ()>
            <div class="camera-modal">
              <video class="camera-preview" node_ref=video_ref autoplay=true></video>
              <button class="btn btn-primary" on:click=capture_photo>"Capture"</button>
              <canvas class="hidden-canvas" node_ref=canvas_ref></canvas>
            </div>
          </Show>

          <Show when=move || attachment.with(|a| a.is_some()) fallback=|| ()>
            <div class="preview">
              <h4>"Captured Image Preview:"</h4>
              <img
                class="preview-image"
                src=move || {
                    attachment
                        .with(|a| a.as_ref().map(|img| img.as_str().to_string()))
                        .unwrap_or_default()
                }
              />
            </div>
          </Show>

          <button class="btn btn-primary submit-btn" on:click=submit>"Submit Report"</button>
        </div>

        <div class="report-history">
          <h2 class="section-title">"Your Reported Issues"</h2>
          <div class="issue-list">
            <For
              each=move || shell.with(|s| s.citizen.items().to_vec())
              key=|report| report.id
              children=move |report| {
                  let image = report.attachment.clone();
                  view! {
                    <div class="issue-card">
                      <h3 class="issue-title">{report.title.clone()}</h3>
                      <span class=format!("status-badge {}", report.status.css_class())>
                        {report.status.label()}
                      </span>
                      <p class="issue-description">{report.description.clone()}</p>
                      {image
                          .map(|img| {
                              view! { <img class="report-image" src=img.as_str().to_string()/> }
                          })}
                      <div class="issue-meta">
                        <span>{report.time_ago.clone()}</span>
                        <span>{report.category.clone()}</span>
                      </div>
                    </div>
                  }
              }
            />
          </div>
        </div>
      </div>
    }
}
