use leptos::prelude::*;
use zeb_core::staking::{DEFAULT_TIER_INDEX, format_quantity, parse_principal};
use zeb_core::{SITE, STAKING_TIERS, estimate};

/// Staking reward calculator: amount input, tier picker, live estimate
#[component]
pub fn StakingCalculator() -> impl IntoView {
    let (amount, set_amount) = signal("1000".to_string());
    let (tier_index, set_tier_index) = signal(DEFAULT_TIER_INDEX);

    let quote = Memo::new(move |_| {
        let tier = &STAKING_TIERS[tier_index.get().min(STAKING_TIERS.len() - 1)];
        estimate(parse_principal(&amount.get()), tier)
    });

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="space-y-4">
                <label class="block">
                    <strong>"STAKE AMOUNT (" {SITE.symbol} ")"</strong>
                    <input
                        type="number"
                        min="0"
                        class="block w-full mt-1"
                        prop:value=amount
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </label>
                <div class="tiers">
                    {STAKING_TIERS.iter().enumerate().map(|(i, tier)| view! {
                        <button
                            class=move || if tier_index.get() == i { "active" } else { "" }
                            on:click=move |_| set_tier_index.set(i)
                        >
                            {tier.label}
                            <br />
                            <span class="text-sm">{format!("{:.0}% APY", tier.apy_percent())}</span>
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="space-y-2">
                <div>
                    <strong>"LOCK PERIOD"</strong> " " {move || quote.get().lock_days} " days"
                </div>
                <div>
                    <strong>"APY"</strong> " " {move || format!("{:.0}%", quote.get().apy * 100.0)}
                </div>
                <div>
                    <strong>"ESTIMATED REWARDS"</strong> " +"
                    {move || format_quantity(quote.get().reward)} " " {SITE.symbol}
                </div>
                <div>
                    <strong>"TOTAL AFTER LOCK"</strong> " "
                    {move || format_quantity(quote.get().total)} " " {SITE.symbol}
                </div>
                <p class="text-sm text-[var(--ink-light)]">
                    "Simple interest estimate. Rewards are paid out at the end of the lock period."
                </p>
            </div>
        </div>
    }
}
