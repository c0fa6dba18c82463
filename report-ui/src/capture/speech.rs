use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

const UNSUPPORTED: &str = "Voice recognition not supported in this browser.";

/// A running continuous-recognition session. The handler closures live
/// here; dropping the session detaches them and stops recognition, so a
/// session cannot outlive the view that started it.
pub struct SpeechSession {
    recognition: SpeechRecognition,
    _on_result: Closure<dyn FnMut(SpeechRecognitionEvent)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut()>,
}

impl SpeechSession {
    /// Starts continuous recognition. `on_transcript` receives each final
    /// utterance; `on_error` receives a display string for mid-session
    /// failures; `on_end` fires when the session stops for any reason.
    pub fn start(
        on_transcript: impl Fn(String) + 'static,
        on_error: impl Fn(String) + 'static,
        on_end: impl Fn() + 'static,
    ) -> Result<Self, String> {
        let ctor = recognition_constructor()?;
        let recognition = Reflect::construct(&ctor, &Array::new())
            .map_err(|e| format!("speech recognition init failed: {e:?}"))?
            .unchecked_into::<SpeechRecognition>();

        recognition.set_lang("en-IN");
        recognition.set_continuous(true);
        recognition.set_interim_results(false);

        let result_cb = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(
            move |ev: SpeechRecognitionEvent| {
                if let Some(results) = ev.results() {
                    let last = results.length().saturating_sub(1);
                    if let Some(alternative) = results.get(last).and_then(|r| r.get(0)) {
                        on_transcript(alternative.transcript());
                    }
                }
            },
        );
        let error_cb = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
            let code = Reflect::get(&ev, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            on_error(format!("Voice recognition error: {code}"));
        });
        let end_cb = Closure::<dyn FnMut()>::new(on_end);

        recognition.set_onresult(Some(result_cb.as_ref().unchecked_ref()));
        recognition.set_onerror(Some(error_cb.as_ref().unchecked_ref()));
        recognition.set_onend(Some(end_cb.as_ref().unchecked_ref()));

        recognition
            .start()
            .map_err(|e| format!("speech recognition start failed: {e:?}"))?;

        Ok(Self {
            recognition,
            _on_result: result_cb,
            _on_error: error_cb,
            _on_end: end_cb,
        })
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.recognition.stop();
    }
}

// Chrome still ships the API behind the webkit prefix.
fn recognition_constructor() -> Result<Function, String> {
    let window = web_sys::window().ok_or_else(|| UNSUPPORTED.to_string())?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(ctor) = Reflect::get(&window, &JsValue::from_str(name)) {
            if ctor.is_function() {
                return Ok(ctor.unchecked_into::<Function>());
            }
        }
    }
    Err(UNSUPPORTED.to_string())
}
