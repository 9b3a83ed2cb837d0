//! Public landing page.

use leptos::prelude::*;

use crate::components::chatbot::Chatbot;
use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::group_selector::GroupSelector;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;
use crate::state::chat::DEMO_LESSON_ID;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Navbar/>
            <main>
                <Hero/>
                <Features/>
                <GroupSelector/>
                <Pricing/>
                <Faq/>
            </main>
            <Footer/>
            <Chatbot lesson_id=DEMO_LESSON_ID.to_owned()/>
        </div>
    }
}
