//! Leptos components of the FinanceFlow page.
//!
//! Components read their slices from the shared [`PageStore`] and never
//! talk to browser APIs directly; the live feeds behind the page are
//! wired up once in [`App`] and torn down on unmount.

use leptos::*;

use crate::application::{LiveSession, PageStore};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Direction;
use crate::domain::page::{DashboardTab, SectionId};
use crate::presentation::content::{
    ALLOCATIONS, CTA_BADGES, FOOTER_COLUMNS, FOOTER_CONTACT, HERO_TRUST, LEGAL_LINKS, NAV_LINKS,
    OVERVIEW_STATS, RECENT_ACTIVITY, SERVICES, TESTIMONIALS,
};
use crate::presentation::format::{dollars, signed_dollars, signed_percent};
use crate::{log_error, log_info};
use strum::IntoEnumIterator;

/// Keyframes and delay utilities the CDN build of Tailwind does not ship.
const PAGE_CSS: &str = r#"
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-right {
    from { opacity: 0; transform: translateX(40px); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes gradient-x {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}

.animate-fade-in { animation: fade-in 0.5s ease-out both; }
.animate-fade-in-up { animation: fade-in-up 1s ease-out both; }
.animate-fade-in-right { animation: fade-in-right 1s ease-out both; }
.animate-gradient-x { background-size: 200% 200%; animation: gradient-x 3s ease infinite; }

.animation-delay-1000 { animation-delay: 1s; }
.animation-delay-2000 { animation-delay: 2s; }
.animation-delay-4000 { animation-delay: 4s; }
"#;

/// Root component. Owns the store and the live session.
#[component]
pub fn App() -> impl IntoView {
    let store = PageStore::provide();
    let session = store_value(None::<LiveSession>);
    let root_ref = create_node_ref::<html::Div>();

    // The observer needs the section elements in the document, so the
    // feeds start once the root node is mounted.
    create_effect(move |_| {
        if root_ref.get().is_none() {
            return;
        }
        if session.with_value(|slot| slot.is_some()) {
            return;
        }
        match LiveSession::start(store) {
            Ok(live) => {
                log_info!(LogComponent::Presentation("App"), "page is live");
                session.set_value(Some(live));
            }
            Err(error) => log_error!(
                LogComponent::Presentation("App"),
                "failed to start live session: {}",
                error
            ),
        }
    });

    on_cleanup(move || {
        session.update_value(|slot| {
            if let Some(mut live) = slot.take() {
                live.shutdown();
            }
        });
    });

    view! {
        <style>{PAGE_CSS}</style>
        <div node_ref=root_ref class="min-h-screen bg-gray-50 overflow-x-hidden">
            <BackdropGlow/>
            <Navigation/>
            <HeroSection/>
            <ServicesSection/>
            <PortfolioSection/>
            <MarketsSection/>
            <TestimonialsSection/>
            <CtaSection/>
            <PageFooter/>
        </div>
    }
}

/// Fixed background orbs floating behind every section.
#[component]
fn BackdropGlow() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class="absolute -top-40 -right-40 w-80 h-80 bg-blue-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse"></div>
            <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse animation-delay-2000"></div>
            <div class="absolute top-40 left-1/2 w-80 h-80 bg-amber-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse animation-delay-4000"></div>
        </div>
    }
}

#[component]
fn Navigation() -> impl IntoView {
    let store = PageStore::expect();

    let nav_class = move || {
        if store.nav_solid.get() {
            "fixed top-0 w-full z-50 transition-all duration-300 bg-white/90 backdrop-blur-md shadow-lg border-b border-white/20"
        } else {
            "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
        }
    };

    let menu_class = move || {
        if store.menu_open.get() {
            "md:hidden transition-all duration-300 max-h-96 opacity-100 overflow-hidden bg-white/95 backdrop-blur-md border-t border-gray-200"
        } else {
            "md:hidden transition-all duration-300 max-h-0 opacity-0 overflow-hidden bg-white/95 backdrop-blur-md border-t border-gray-200"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2 group">
                        <div class="bg-gradient-to-r from-blue-600 to-blue-700 p-2 rounded-lg group-hover:scale-110 transition-transform duration-300 shadow-lg">
                            <span class="text-white">"📈"</span>
                        </div>
                        <span class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "FinanceFlow"
                        </span>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=format!("#{}", link.to_lowercase())
                                        class="relative text-gray-700 hover:text-blue-600 font-medium transition-all duration-300 group"
                                    >
                                        {*link}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-blue-600 to-purple-600 group-hover:w-full transition-all duration-300"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button class="bg-gradient-to-r from-blue-600 to-blue-700 text-white px-6 py-2 rounded-lg hover:from-blue-700 hover:to-blue-800 transition-all duration-300 font-medium shadow-lg hover:shadow-xl transform hover:scale-105">
                            "Get Started"
                        </button>
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| store.toggle_menu()
                            class="text-gray-700 hover:text-blue-600 transition-colors duration-300 text-2xl"
                        >
                            {move || if store.menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <div class=menu_class>
                <div class="px-4 py-6 space-y-4">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, link)| {
                            view! {
                                <a
                                    href=format!("#{}", link.to_lowercase())
                                    class="block text-gray-700 hover:text-blue-600 font-medium transition-all duration-300 transform hover:translate-x-2"
                                    style=format!("animation-delay: {}ms", index * 100)
                                >
                                    {*link}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="w-full bg-gradient-to-r from-blue-600 to-blue-700 text-white px-6 py-2 rounded-lg hover:from-blue-700 hover:to-blue-800 transition-all duration-300 font-medium shadow-lg">
                        "Get Started"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section id="hero" class="relative min-h-screen bg-gradient-to-br from-blue-600 via-blue-700 to-purple-800 text-white overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute top-20 left-10 w-2 h-2 bg-white rounded-full animate-ping opacity-60"></div>
                <div class="absolute top-40 right-20 w-1 h-1 bg-amber-400 rounded-full animate-pulse"></div>
                <div class="absolute bottom-40 left-1/4 w-1.5 h-1.5 bg-emerald-400 rounded-full animate-bounce"></div>
                <div class="absolute top-1/3 right-1/3 w-1 h-1 bg-white rounded-full animate-pulse animation-delay-1000"></div>
            </div>

            <div
                class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 pt-32 relative"
                style:transform=move || format!("translateY({}px)", store.hero_parallax.get())
            >
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 animate-fade-in-up">
                        <div class="flex items-center space-x-2 text-amber-400 mb-4">
                            <span class="animate-pulse">"✨"</span>
                            <span class="text-sm font-semibold tracking-wide uppercase">
                                "Trusted by 50,000+ Investors"
                            </span>
                        </div>

                        <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                            "Smart Investing for"
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-amber-400 to-orange-500 animate-gradient-x">
                                " Your Future"
                            </span>
                        </h1>

                        <p class="text-xl text-blue-100 leading-relaxed max-w-lg">
                            "Professional investment management with cutting-edge AI technology. Grow your wealth with personalized strategies and real-time insights."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <button class="group bg-gradient-to-r from-amber-500 to-orange-500 text-white px-8 py-4 rounded-lg hover:from-amber-600 hover:to-orange-600 transition-all duration-300 font-semibold text-lg flex items-center justify-center shadow-2xl hover:shadow-amber-500/25 transform hover:scale-105">
                                "Start Investing"
                                <span class="ml-2 group-hover:translate-x-1 transition-transform duration-300">"→"</span>
                            </button>
                            <button class="group border-2 border-white text-white px-8 py-4 rounded-lg hover:bg-white hover:text-blue-700 transition-all duration-300 font-semibold text-lg backdrop-blur-sm">
                                <span class="flex items-center">
                                    <span class="mr-2 group-hover:text-amber-500 transition-colors duration-300">"⚡"</span>
                                    "View Demo"
                                </span>
                            </button>
                        </div>

                        <div class="flex items-center space-x-6 pt-8">
                            {HERO_TRUST
                                .iter()
                                .map(|badge| {
                                    view! {
                                        <div class="flex items-center space-x-2">
                                            <span>{badge.icon}</span>
                                            <span class="text-sm text-blue-100">{badge.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LiveMarketsCard/>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-white/50 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-white rounded-full mt-2 animate-pulse"></div>
                </div>
            </div>
        </section>
    }
}

/// Frosted-glass quote card on the hero, showing the first three indices.
#[component]
fn LiveMarketsCard() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <div class="relative animate-fade-in-right">
            <div class="absolute inset-0 bg-gradient-to-r from-white/10 to-white/5 rounded-2xl blur-xl"></div>
            <div class="relative bg-white/10 backdrop-blur-lg rounded-2xl p-6 border border-white/20 shadow-2xl">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-semibold">"Live Markets"</h3>
                    <div class="flex items-center space-x-2 text-emerald-400">
                        <div class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></div>
                        <span class="text-sm">"Live"</span>
                    </div>
                </div>

                <div class="space-y-4">
                    {move || {
                        store
                            .board
                            .get()
                            .entries()
                            .iter()
                            .take(3)
                            .enumerate()
                            .map(|(index, entry)| {
                                let symbol = entry.symbol.value().to_string();
                                let price = dollars(entry.price.value());
                                let percent = signed_percent(entry.change_percent);
                                let (tone, arrow) = match entry.direction {
                                    Direction::Up => ("flex items-center space-x-2 text-emerald-400", "▲"),
                                    Direction::Down => ("flex items-center space-x-2 text-red-400", "▼"),
                                };
                                view! {
                                    <div
                                        class="group flex justify-between items-center p-4 bg-white/10 rounded-lg hover:bg-white/20 transition-all duration-300 transform hover:scale-105"
                                        style=format!("animation-delay: {}ms", index * 200)
                                    >
                                        <div>
                                            <p class="font-semibold group-hover:text-amber-300 transition-colors duration-300">
                                                {symbol}
                                            </p>
                                            <p class="text-blue-100 text-lg font-mono">{price}</p>
                                        </div>
                                        <div class=tone>
                                            <span class="animate-bounce">{arrow}</span>
                                            <span class="font-semibold">{percent}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="mt-6 p-4 bg-gradient-to-r from-emerald-500/20 to-blue-500/20 rounded-lg border border-emerald-400/30">
                    <div class="flex items-center space-x-2 mb-2">
                        <span class="text-emerald-400">"🌐"</span>
                        <span class="text-sm font-semibold text-emerald-300">"Global Portfolio Performance"</span>
                    </div>
                    <p class="text-2xl font-bold text-white">"+14.7%"</p>
                    <p class="text-emerald-300 text-sm">"Average annual return"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section id="services" class="py-20 bg-white relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50/50 to-purple-50/50"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class="text-center mb-16" id=SectionId::Services.dom_id()>
                    <div class="inline-flex items-center space-x-2 bg-blue-100 text-blue-800 px-4 py-2 rounded-full text-sm font-semibold mb-4">
                        <span>"✨"</span>
                        <span>"Premium Services"</span>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Comprehensive Financial Solutions"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Tailored investment strategies powered by advanced analytics and decades of expertise."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            let card_class = move || {
                                if store.section_revealed(SectionId::Services) {
                                    "group relative bg-white rounded-2xl p-8 hover:shadow-2xl transition-all duration-500 border border-gray-100 hover:border-transparent transform hover:-translate-y-2 animate-fade-in-up"
                                } else {
                                    "group relative bg-white rounded-2xl p-8 hover:shadow-2xl transition-all duration-500 border border-gray-100 hover:border-transparent transform hover:-translate-y-2 opacity-0"
                                }
                            };
                            view! {
                                <div class=card_class style=format!("animation-delay: {}ms", service.delay_ms)>
                                    <div class=format!(
                                        "inline-flex items-center justify-center w-16 h-16 rounded-xl bg-gradient-to-r {} text-white mb-6 group-hover:scale-110 transition-transform duration-300 shadow-lg text-3xl",
                                        service.color,
                                    )>{service.icon}</div>

                                    <h3 class="text-2xl font-semibold text-gray-900 mb-3 group-hover:text-blue-600 transition-colors duration-300">
                                        {service.title}
                                    </h3>

                                    <p class="text-gray-600 mb-6 leading-relaxed">{service.description}</p>

                                    <ul class="space-y-3">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center text-gray-700 group-hover:text-gray-900 transition-colors duration-300">
                                                        <span class="text-emerald-500 mr-3 flex-shrink-0">"✓"</span>
                                                        <span class="font-medium">{*feature}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>

                                    <div class="mt-6 pt-6 border-t border-gray-100">
                                        <button class="text-blue-600 font-semibold hover:text-blue-700 transition-colors duration-300 flex items-center group-hover:translate-x-1 transform transition-transform">
                                            "Learn More"
                                            <span class="ml-2">"→"</span>
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn tab_icon(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Overview => "📊",
        DashboardTab::Holdings => "📋",
        DashboardTab::Performance => "📈",
        DashboardTab::Transactions => "💵",
    }
}

#[component]
fn PortfolioSection() -> impl IntoView {
    let store = PageStore::expect();

    let dashboard_class = move || {
        if store.section_revealed(SectionId::Portfolio) {
            "bg-white rounded-3xl shadow-2xl overflow-hidden border border-gray-200 animate-fade-in-up"
        } else {
            "bg-white rounded-3xl shadow-2xl overflow-hidden border border-gray-200 opacity-0"
        }
    };

    view! {
        <section id="portfolio" class="py-20 bg-gradient-to-br from-gray-50 to-blue-50 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16" id=SectionId::Portfolio.dom_id()>
                    <div class="inline-flex items-center space-x-2 bg-purple-100 text-purple-800 px-4 py-2 rounded-full text-sm font-semibold mb-4">
                        <span>"📊"</span>
                        <span>"Interactive Dashboard"</span>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"Portfolio Dashboard"</h2>
                    <p class="text-xl text-gray-600">
                        "Track your investments with our intuitive and comprehensive dashboard."
                    </p>
                </div>

                <div class=dashboard_class>
                    <div class="border-b border-gray-200 bg-gray-50">
                        <div class="flex space-x-8 px-6 overflow-x-auto">
                            {DashboardTab::iter()
                                .map(|tab| {
                                    let tab_class = move || {
                                        if store.active_tab.get() == tab {
                                            "flex items-center space-x-2 py-4 px-2 border-b-2 font-medium text-sm capitalize transition-all duration-300 whitespace-nowrap border-blue-500 text-blue-600 bg-blue-50 rounded-t-lg"
                                        } else {
                                            "flex items-center space-x-2 py-4 px-2 border-b-2 font-medium text-sm capitalize transition-all duration-300 whitespace-nowrap border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
                                        }
                                    };
                                    view! {
                                        <button on:click=move |_| store.select_tab(tab) class=tab_class>
                                            <span>{tab_icon(tab)}</span>
                                            <span>{tab.label()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="p-8">
                        {move || store.active_tab.get().has_content().then(|| view! { <OverviewPanel/> })}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Body of the overview tab: stat cards, allocation bars, recent activity.
#[component]
fn OverviewPanel() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <div class="space-y-8 animate-fade-in">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {OVERVIEW_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class=format!(
                                "relative overflow-hidden bg-gradient-to-r {} rounded-xl p-6 text-white transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-2xl",
                                stat.color,
                            )>
                                <div class="absolute top-0 right-0 -mt-4 -mr-4 w-24 h-24 bg-white/10 rounded-full"></div>
                                <div class="relative">
                                    <div class="flex items-center justify-between mb-2">
                                        <p class="text-white/80 text-sm font-medium">{stat.title}</p>
                                        <span class="text-xl">{stat.icon}</span>
                                    </div>
                                    <p class="text-3xl font-bold mb-1">{stat.value}</p>
                                    <p class="text-white/90 text-sm">{stat.change}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-gray-50 rounded-2xl p-6">
                    <h3 class="text-xl font-semibold text-gray-900 mb-6 flex items-center">
                        <span class="mr-2 text-blue-600">"📊"</span>
                        "Portfolio Allocation"
                    </h3>
                    <div class="space-y-4">
                        {ALLOCATIONS
                            .iter()
                            .enumerate()
                            .map(|(index, row)| {
                                // Bars grow from zero once the dashboard has been seen.
                                let bar_style = move || {
                                    let width = if store.section_revealed(SectionId::Portfolio) {
                                        row.percentage
                                    } else {
                                        0
                                    };
                                    format!("width: {}%; transition-delay: {}ms", width, index * 200)
                                };
                                view! {
                                    <div class="group">
                                        <div class="flex items-center justify-between mb-2">
                                            <div class="flex items-center space-x-3">
                                                <div class=format!("w-4 h-4 rounded-full {}", row.color)></div>
                                                <span class="font-medium text-gray-900">{row.name}</span>
                                            </div>
                                            <div class="text-right">
                                                <p class="font-semibold text-gray-900">{row.value}</p>
                                                <p class="text-sm text-emerald-600 font-medium">{row.change}</p>
                                            </div>
                                        </div>
                                        <div class="w-full bg-gray-200 rounded-full h-2 overflow-hidden">
                                            <div
                                                class=format!("h-2 {} rounded-full transition-all duration-1000 ease-out", row.color)
                                                style=bar_style
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-gray-50 rounded-2xl p-6">
                    <h3 class="text-xl font-semibold text-gray-900 mb-6 flex items-center">
                        <span class="mr-2 text-purple-600">"⚡"</span>
                        "Recent Activity"
                    </h3>
                    <div class="space-y-4">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|activity| {
                                view! {
                                    <div class="flex justify-between items-center p-4 bg-white rounded-lg hover:shadow-md transition-all duration-300 border border-gray-100 group">
                                        <div class="flex items-center space-x-3">
                                            <div class=format!(
                                                "w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold text-white {}",
                                                activity.kind.badge_class(),
                                            )>{activity.kind.initial()}</div>
                                            <div>
                                                <p class="font-medium text-gray-900 group-hover:text-blue-600 transition-colors duration-300">
                                                    {activity.kind.label()}
                                                    " "
                                                    {activity.symbol}
                                                </p>
                                                <p class="text-sm text-gray-500">{activity.detail}</p>
                                            </div>
                                        </div>
                                        <span class="text-xs text-gray-400 font-medium">{activity.time}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MarketsSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section id="markets" class="py-20 bg-white relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50/30 to-purple-50/30"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class="text-center mb-16" id=SectionId::Markets.dom_id()>
                    <div class="inline-flex items-center space-x-2 bg-emerald-100 text-emerald-800 px-4 py-2 rounded-full text-sm font-semibold mb-4">
                        <span>"🌐"</span>
                        <span>"Live Market Data"</span>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Real-Time Market Insights"
                    </h2>
                    <p class="text-xl text-gray-600">"Stay ahead with live market data and advanced analytics."</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || {
                        let revealed = store.section_revealed(SectionId::Markets);
                        store
                            .board
                            .get()
                            .entries()
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let card_class = if revealed {
                                    "group bg-white border border-gray-200 rounded-xl p-6 hover:shadow-2xl transition-all duration-500 transform hover:-translate-y-1 animate-fade-in-up"
                                } else {
                                    "group bg-white border border-gray-200 rounded-xl p-6 hover:shadow-2xl transition-all duration-500 transform hover:-translate-y-1 opacity-0"
                                };
                                let symbol = entry.symbol.value().to_string();
                                let price = dollars(entry.price.value());
                                let change = signed_dollars(entry.change);
                                let percent = format!("({})", signed_percent(entry.change_percent));
                                let (trend_class, arrow) = match entry.direction {
                                    Direction::Up => ("flex items-center space-x-1 p-2 rounded-lg text-emerald-600 bg-emerald-50", "▲"),
                                    Direction::Down => ("flex items-center space-x-1 p-2 rounded-lg text-red-600 bg-red-50", "▼"),
                                };
                                // Accent follows the change sign, the arrow follows direction.
                                let change_class = if entry.is_gaining() {
                                    "flex items-center space-x-2 text-emerald-600"
                                } else {
                                    "flex items-center space-x-2 text-red-600"
                                };
                                view! {
                                    <div class=card_class style=format!("animation-delay: {}ms", index * 150)>
                                        <div class="flex justify-between items-start mb-4">
                                            <div>
                                                <h3 class="font-semibold text-gray-900 group-hover:text-blue-600 transition-colors duration-300">
                                                    {symbol}
                                                </h3>
                                                <div class="flex items-center space-x-2 mt-1">
                                                    <div class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></div>
                                                    <span class="text-xs text-gray-500 font-medium">"LIVE"</span>
                                                </div>
                                            </div>
                                            <div class=trend_class>
                                                <span class="animate-bounce">{arrow}</span>
                                            </div>
                                        </div>

                                        <p class="text-3xl font-bold text-gray-900 mb-3 font-mono">{price}</p>

                                        <div class=change_class>
                                            <span class="font-semibold">{change}</span>
                                            <span class="font-medium">{percent}</span>
                                        </div>

                                        <div class="mt-4 pt-4 border-t border-gray-100">
                                            <button class="text-blue-600 hover:text-blue-700 font-medium text-sm transition-colors duration-300 flex items-center group-hover:translate-x-1 transform transition-transform">
                                                "View Details"
                                                <span class="ml-1">"→"</span>
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section class="py-20 bg-gradient-to-br from-gray-50 to-blue-50 relative overflow-hidden">
            <div class="absolute inset-0 opacity-40">
                <div class="absolute top-20 left-10 w-32 h-32 bg-blue-200 rounded-full mix-blend-multiply filter blur-xl animate-pulse"></div>
                <div class="absolute bottom-20 right-10 w-32 h-32 bg-purple-200 rounded-full mix-blend-multiply filter blur-xl animate-pulse animation-delay-2000"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class="text-center mb-16" id=SectionId::Testimonials.dom_id()>
                    <div class="inline-flex items-center space-x-2 bg-amber-100 text-amber-800 px-4 py-2 rounded-full text-sm font-semibold mb-4">
                        <span>"★"</span>
                        <span>"Client Success Stories"</span>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Trusted by Industry Leaders"
                    </h2>
                    <p class="text-xl text-gray-600">
                        "Join thousands of satisfied clients who've achieved their financial goals with us."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            let card_class = move || {
                                if store.section_revealed(SectionId::Testimonials) {
                                    "group bg-white rounded-2xl p-8 shadow-lg hover:shadow-2xl transition-all duration-500 border border-gray-100 transform hover:-translate-y-2 animate-fade-in-up"
                                } else {
                                    "group bg-white rounded-2xl p-8 shadow-lg hover:shadow-2xl transition-all duration-500 border border-gray-100 transform hover:-translate-y-2 opacity-0"
                                }
                            };
                            view! {
                                <div class=card_class style=format!("animation-delay: {}ms", index * 200)>
                                    <div class="flex mb-4">
                                        {(0..testimonial.rating)
                                            .map(|star| {
                                                view! {
                                                    <span
                                                        class="text-amber-400 animate-pulse"
                                                        style=format!("animation-delay: {}ms", star * 100)
                                                    >
                                                        "★"
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>

                                    <p class="text-gray-600 mb-6 leading-relaxed italic group-hover:text-gray-700 transition-colors duration-300">
                                        {format!("\"{}\"", testimonial.quote)}
                                    </p>

                                    <div class="flex items-center space-x-4">
                                        <div class="relative">
                                            <img
                                                src=testimonial.avatar
                                                alt=testimonial.name
                                                class="w-12 h-12 rounded-full object-cover ring-2 ring-blue-100 group-hover:ring-blue-300 transition-all duration-300"
                                            />
                                            <div class="absolute -bottom-1 -right-1 w-4 h-4 bg-emerald-400 rounded-full border-2 border-white"></div>
                                        </div>
                                        <div>
                                            <p class="font-semibold text-gray-900 group-hover:text-blue-600 transition-colors duration-300">
                                                {testimonial.name}
                                            </p>
                                            <p class="text-gray-500 text-sm">{testimonial.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-blue-600 via-blue-700 to-purple-800 text-white relative overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute top-10 left-10 w-20 h-20 border border-white/20 rounded-full animate-pulse"></div>
                <div class="absolute bottom-10 right-10 w-16 h-16 border border-white/20 rounded-full animate-pulse animation-delay-1000"></div>
                <div class="absolute top-1/2 left-1/4 w-2 h-2 bg-white rounded-full animate-ping"></div>
                <div class="absolute top-1/3 right-1/3 w-1 h-1 bg-amber-400 rounded-full animate-pulse"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative">
                <div class="animate-fade-in-up" id=SectionId::CallToAction.dom_id()>
                    <div class="inline-flex items-center space-x-2 bg-white/10 backdrop-blur-sm text-white px-4 py-2 rounded-full text-sm font-semibold mb-6">
                        <span class="animate-pulse">"✨"</span>
                        <span>"Start Your Journey Today"</span>
                    </div>

                    <h2 class="text-4xl md:text-6xl font-bold mb-6">
                        "Ready to Transform Your"
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-amber-400 to-orange-500">
                            " Financial Future?"
                        </span>
                    </h2>

                    <p class="text-xl mb-8 text-blue-100 max-w-3xl mx-auto leading-relaxed">
                        "Join over 50,000 satisfied investors who trust us with their financial future. Get started today with a personalized consultation and see the difference professional management makes."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center mb-12">
                        <button class="group bg-gradient-to-r from-amber-500 to-orange-500 text-white px-10 py-4 rounded-xl hover:from-amber-600 hover:to-orange-600 transition-all duration-300 font-semibold text-lg shadow-2xl hover:shadow-amber-500/25 transform hover:scale-105">
                            <span class="flex items-center justify-center">
                                "Open Free Account"
                                <span class="ml-2 group-hover:translate-x-1 transition-transform duration-300">"→"</span>
                            </span>
                        </button>
                        <button class="group border-2 border-white text-white px-10 py-4 rounded-xl hover:bg-white hover:text-blue-700 transition-all duration-300 font-semibold text-lg backdrop-blur-sm">
                            <span class="flex items-center justify-center">
                                <span class="mr-2 group-hover:text-blue-600 transition-colors duration-300">"📞"</span>
                                "Schedule Consultation"
                            </span>
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                        {CTA_BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <div class="text-center group">
                                        <div class="inline-flex items-center justify-center w-16 h-16 bg-white/10 backdrop-blur-sm rounded-xl mb-4 group-hover:bg-white/20 transition-all duration-300 group-hover:scale-110">
                                            <span class="text-2xl text-amber-400 group-hover:text-amber-300 transition-colors duration-300">
                                                {badge.icon}
                                            </span>
                                        </div>
                                        <h3 class="font-semibold text-lg mb-2">{badge.title}</h3>
                                        <p class="text-blue-100 text-sm">{badge.detail}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PageFooter() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-16 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-gray-900 via-blue-900/20 to-purple-900/20"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-12">
                    <div class="space-y-4">
                        <div class="flex items-center space-x-2 group">
                            <div class="bg-gradient-to-r from-blue-600 to-blue-700 p-2 rounded-lg group-hover:scale-110 transition-transform duration-300 shadow-lg">
                                <span class="text-white">"📈"</span>
                            </div>
                            <span class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                "FinanceFlow"
                            </span>
                        </div>
                        <p class="text-gray-400 leading-relaxed">
                            "Professional investment management with cutting-edge technology for your financial success."
                        </p>
                        <div class="flex space-x-4">
                            {["facebook", "twitter", "linkedin", "instagram"]
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href="#"
                                            class="w-10 h-10 bg-gray-800 rounded-lg flex items-center justify-center hover:bg-blue-600 transition-all duration-300 transform hover:scale-110"
                                        >
                                            <span class="sr-only">{*social}</span>
                                            <div class="w-5 h-5 bg-gray-400 rounded"></div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h3 class="font-semibold text-lg mb-4 text-white">{column.title}</h3>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href="#"
                                                            class="text-gray-400 hover:text-white transition-colors duration-300 hover:translate-x-1 transform inline-block"
                                                        >
                                                            {*link}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div>
                        <h3 class="font-semibold text-lg mb-4 text-white">"Contact"</h3>
                        <ul class="space-y-3">
                            {FOOTER_CONTACT
                                .iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            <div class="flex items-center space-x-2 text-gray-400">
                                                <span>{line.icon}</span>
                                                <span>{line.text}</span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 text-center">
                    <p class="text-gray-400">
                        "© 2025 FinanceFlow. All rights reserved. Securities offered through registered representatives."
                    </p>
                    <div class="flex justify-center space-x-6 mt-4">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href="#"
                                        class="text-gray-400 hover:text-white transition-colors duration-300 text-sm"
                                    >
                                        {*link}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
