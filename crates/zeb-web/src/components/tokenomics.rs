use leptos::prelude::*;
use zeb_core::SITE;
use zeb_core::staking::format_quantity;

/// Token facts and the distribution breakdown
#[component]
pub fn Tokenomics() -> impl IntoView {
    let t = &SITE.tokenomics;

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div>
                <div><strong>"SYMBOL"</strong> " " {SITE.symbol}</div>
                <div><strong>"TYPE"</strong> " " {SITE.token_standard}</div>
                <div><strong>"INITIAL VALUE"</strong> " $" {format!("{:.2}", t.ido_price_usd)}</div>
                <div><strong>"TOTAL SUPPLY"</strong> " " {format_quantity(t.total_supply as f64)}</div>
            </div>
            <div class="space-y-3">
                {t.allocations.iter().map(|a| view! {
                    <div>
                        <div class="flex justify-between">
                            <strong>{a.name}</strong>
                            <span>{a.percent} "%"</span>
                        </div>
                        <div class="h-2 bg-[var(--rule)]">
                            <div class="h-2 bg-[var(--accent)]" style=format!("width: {}%", a.percent)></div>
                        </div>
                        <div class="text-sm text-[var(--ink-light)]">
                            {format_quantity(a.tokens(t.total_supply) as f64)} " " {SITE.symbol} " · " {a.description}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
