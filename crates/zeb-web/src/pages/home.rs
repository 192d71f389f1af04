use leptos::prelude::*;
use zeb_core::SITE;

use crate::components::{Countdown, Section, StakingCalculator, Tokenomics, TransferTicker};
use crate::config::feed_config;

#[component]
pub fn HomePage() -> impl IntoView {
    let feed = feed_config();
    let contract = feed.contract_address.clone();
    let token_url = feed.token_url();

    view! {
        <main>
            // Hero
            <header class="mb-12 text-center">
                <h1 class="text-5xl font-bold">{SITE.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{SITE.tagline}</div>
                <div class="mt-6 flex justify-center gap-4">
                    <a href=SITE.links.dex target="_blank" rel="noopener noreferrer">
                        "Buy " {SITE.symbol} " ↗"
                    </a>
                    <a href=token_url target="_blank" rel="noopener noreferrer">
                        "Explorer ↗"
                    </a>
                </div>
            </header>

            <Section id="launch" title="Coming Soon">
                <Countdown />
            </Section>

            <Section
                id="staking"
                title="Staking Calculator"
                subtitle="Lock your tokens and see what they earn"
            >
                <StakingCalculator />
            </Section>

            <Section id="activity" title="Recent Token Activity">
                <TransferTicker config=feed />
            </Section>

            <Section id="tokenomics" title="Tokenomics">
                <Tokenomics />
            </Section>

            // Footer
            <footer class="mt-12 pt-4 border-t border-[var(--rule)] text-center text-[var(--ink-light)] text-sm">
                <div class="font-mono">{contract}</div>
                <div class="mt-2 flex justify-center gap-4">
                    <a href=SITE.links.twitter target="_blank" rel="noopener noreferrer">"X ↗"</a>
                    <a href=SITE.links.telegram target="_blank" rel="noopener noreferrer">"Telegram ↗"</a>
                    <a href=SITE.links.instagram target="_blank" rel="noopener noreferrer">"Instagram ↗"</a>
                </div>
            </footer>
        </main>
    }
}
