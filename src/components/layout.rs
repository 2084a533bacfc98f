use yew::prelude::*;

use crate::components::{Header, Sidebar};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// App chrome around every protected view: collapsible sidebar + header.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| true);

    let on_toggle = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(!*sidebar_open))
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex">
            <Sidebar is_open={*sidebar_open} on_toggle={on_toggle.clone()} />
            <div class="flex-1 flex flex-col">
                <Header on_menu_click={on_toggle} />
                <main class="flex-1 p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
