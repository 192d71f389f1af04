use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys::window;
use zeb_core::format::{format_address, format_relative_time, format_token_amount};
use zeb_core::ticker::{Marquee, loop_items};
use zeb_core::{FeedConfig, SITE, TransferFeed};

use crate::api::fetch_transfers;

/// Height of one ticker row in pixels (matches `.ticker-row` in main.css)
const ROW_HEIGHT_PX: f64 = 60.0;

/// Check if user prefers reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Start a fetch and apply its result when it lands
fn refresh(feed: RwSignal<TransferFeed>, config: FeedConfig) {
    let Some(ticket) = feed.try_update(|f| f.begin_fetch()).flatten() else {
        return;
    };

    leptos::task::spawn_local(async move {
        let result = fetch_transfers(&config).await;
        // Signal is gone if the ticker unmounted mid-fetch
        feed.try_update(|f| f.complete(ticket, result, now_secs()));
    });
}

/// Re-fetch every `refresh_interval_secs`; returns the interval handle
fn start_refresh_timer(feed: RwSignal<TransferFeed>, config: FeedConfig) -> Option<i32> {
    let window = window()?;
    let timeout_ms = i32::try_from(config.refresh_interval_secs.saturating_mul(1000)).unwrap_or(i32::MAX);

    let callback = Closure::wrap(Box::new(move || {
        refresh(feed, config.clone());
    }) as Box<dyn FnMut()>);

    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), timeout_ms)
        .ok();
    // The interval is cleared on cleanup, after which the closure is never called
    callback.forget();
    handle
}

/// Drive the marquee from requestAnimationFrame until `stopped` is set
fn start_marquee(row_count: Memo<usize>, set_offset: WriteSignal<f64>, stopped: Arc<AtomicBool>) {
    let Some(win) = window() else {
        return;
    };

    let mut marquee = Marquee::for_rows(0, ROW_HEIGHT_PX);
    let mut known_rows = 0;

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if stopped.load(Ordering::Relaxed) {
            marquee.stop();
            // Drop our handle so the closure is freed once it returns
            let _ = next.borrow_mut().take();
            return;
        }

        let rows = row_count.get_untracked();
        if rows != known_rows {
            known_rows = rows;
            marquee.set_content_len(rows as f64 * ROW_HEIGHT_PX);
        }
        set_offset.set(marquee.tick(timestamp));

        if let (Some(win), Some(callback)) = (window(), next.borrow().as_ref()) {
            let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Live ZCN transfers in a vertically looping ticker
#[component]
pub fn TransferTicker(config: FeedConfig) -> impl IntoView {
    let feed = RwSignal::new(TransferFeed::new());
    let (offset, set_offset) = signal(0.0_f64);
    let row_count = Memo::new(move |_| feed.with(|f| f.transfers().len()));
    let stopped = Arc::new(AtomicBool::new(false));

    // Idle -> Fetching on mount, then every refresh interval
    refresh(feed, config.clone());
    let interval = start_refresh_timer(feed, config.clone());

    if !prefers_reduced_motion() {
        start_marquee(row_count, set_offset, stopped.clone());
    }

    on_cleanup(move || {
        // The pending frame sees the flag, does no work and frees its closure
        stopped.store(true, Ordering::Relaxed);
        if let (Some(win), Some(handle)) = (window(), interval) {
            win.clear_interval_with_handle(handle);
        }
        feed.try_update(|f| f.teardown());
    });

    let token_url = config.token_url();
    let click_config = config.clone();
    let links = config;

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="space-y-4">
                <p class="text-[var(--ink-light)]">
                    "Track real-time " {SITE.symbol} " token transfers on " {SITE.chain} "."
                </p>
                <div class="flex gap-2 items-center">
                    <button
                        on:click=move |_| refresh(feed, click_config.clone())
                        disabled=move || feed.with(|f| f.is_loading())
                    >
                        {move || if feed.with(|f| f.is_loading()) { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <a href=token_url target="_blank" rel="noopener noreferrer">
                        "View all ↗"
                    </a>
                    {move || feed.with(|f| f.is_degraded()).then(|| view! {
                        <span class="badge" title="Live data unavailable">"sample data"</span>
                    })}
                </div>
            </div>

            <div class="ticker">
                {move || feed.with(|f| {
                    if f.transfers().is_empty() {
                        return view! {
                            <div class="text-[var(--ink-light)] p-4">"Loading transfers..."</div>
                        }.into_any();
                    }

                    let rows = loop_items(f.transfers());
                    view! {
                        <div style=move || format!("transform: translateY(-{:.2}px)", offset.get())>
                            {rows.into_iter().map(|t| view! {
                                <a
                                    class="ticker-row"
                                    href=links.tx_url(&t.hash)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <strong>
                                        {format_token_amount(&t.raw_value, &t.token_decimals)} " " {SITE.symbol}
                                    </strong>
                                    <span class="font-mono text-sm">
                                        {format_address(&t.from)} " → " {format_address(&t.to)}
                                    </span>
                                    <span class="text-sm text-[var(--ink-light)]">
                                        {format_relative_time(&t.timestamp)}
                                    </span>
                                </a>
                            }).collect_view()}
                        </div>
                    }.into_any()
                })}
            </div>
        </div>
    }
}
