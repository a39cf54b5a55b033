//! Fixed site header with section navigation.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::navigation::{HOME_PAGE, NAV_LINKS, scroll_to_section};

pub const YOUTUBE_URL: &str = "https://www.youtube.com/@OnTheDocket-SCOTUS";

const NAV_ITEM_CLASS: &str = "text-[15px] font-normal text-text-primary hover:text-primary transition-colors";

/// Header for the home page (`is_home`) or a sub-page.
#[component]
pub fn SiteHeader(is_home: bool) -> impl IntoView {
    let nav = NAV_LINKS
        .into_iter()
        .map(|link| {
            if is_home {
                view! {
                    <button type="button" class=NAV_ITEM_CLASS on:click=move |_| scroll_to_section(link.section)>
                        {link.label}
                    </button>
                }
                .into_any()
            } else {
                view! { <a href=link.href() class=NAV_ITEM_CLASS>{link.label}</a> }.into_any()
            }
        })
        .collect_view();

    view! {
        <header id="header" class=header_class(is_home) data-header=header_kind(is_home)>
            <div class="max-w-container mx-auto px-4 sm:px-6 md:px-12 lg:px-16">
                <div class="header-inner flex items-center justify-between py-4 md:py-6">
                    <a href=logo_href(is_home) class="h-8 md:h-10 block">
                        <picture>
                            <source srcset="assets/images/logo.webp" type="image/webp" />
                            <img
                                src="assets/images/logo.png"
                                alt="ONTHEDOCKET"
                                class="h-full w-auto"
                                width="120"
                                height="40"
                                loading="eager"
                            />
                        </picture>
                    </a>
                    <nav class="header-nav hidden md:flex items-center gap-10">{nav}</nav>
                    <a
                        href=YOUTUBE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="header-cta inline-flex items-center justify-center px-4 py-2 md:px-6 md:py-2.5 bg-primary text-white text-xs sm:text-sm font-normal rounded-md hover:bg-primary-hover transition-colors whitespace-nowrap"
                    >
                        "Watch on YouTube"
                    </a>
                </div>
            </div>
        </header>
    }
}

fn header_class(is_home: bool) -> String {
    let base = "fixed top-0 left-0 right-0 z-50 bg-white header-transition";
    if is_home { format!("{base} header-at-top") } else { base.to_owned() }
}

/// Value of `data-header`, read back by the visibility controller.
fn header_kind(is_home: bool) -> &'static str {
    if is_home { "home" } else { "subpage" }
}

fn logo_href(is_home: bool) -> &'static str {
    if is_home { "#hero" } else { HOME_PAGE }
}
