use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use zeb_core::SITE;
use zeb_core::countdown::{TimeLeft, pad2, parse_target, time_left};

fn current_time_left() -> TimeLeft {
    parse_target(SITE.launch_at)
        .map(|target| time_left(target, Utc::now()))
        .unwrap_or_default()
}

/// Launch countdown, ticking once a second
#[component]
pub fn Countdown() -> impl IntoView {
    let (left, set_left) = signal(current_time_left());

    // Use web_sys directly for setInterval since gloo's Interval isn't Send+Sync
    let handle = web_sys::window().and_then(|window| {
        let callback = Closure::wrap(Box::new(move || {
            set_left.set(current_time_left());
        }) as Box<dyn FnMut()>);

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), 1000)
            .ok();
        // The interval is cleared on cleanup, after which the closure is never called
        callback.forget();
        handle
    });

    on_cleanup(move || {
        if let (Some(window), Some(handle)) = (web_sys::window(), handle) {
            window.clear_interval_with_handle(handle);
        }
    });

    view! {
        {move || {
            let left = left.get();
            if left.is_zero() {
                view! { <div class="text-center"><strong>"LIVE NOW"</strong></div> }.into_any()
            } else {
                view! {
                    <div class="countdown">
                        {left.units().into_iter().map(|(label, value)| view! {
                            <div>
                                <div class="text-4xl font-bold">{pad2(value)}</div>
                                <div class="text-sm text-[var(--ink-light)]">{label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any()
            }
        }}
    }
}
