use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_toast::{use_toast, Toast, ToastHandle, ToastQueue, ToastVariant};
use crate::utils::TOAST_DISMISS_MS;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the toast queue and exposes a dispatch-only handle via context.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle::new(queue.dispatcher());

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <Toaster queue={(*queue).clone()} />
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: ToastQueue,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster fixed bottom-4 right-4 z-50 space-y-2">
            { for props.queue.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toasts = use_toast();

    // Auto-dismiss; the timer is dropped (cancelled) if the toast goes away
    // first.
    {
        let toasts = toasts.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DISMISS_MS, move || toasts.dismiss(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let toasts = toasts.clone();
        let id = props.toast.id;
        Callback::from(move |_| toasts.dismiss(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Default => "toast bg-white border border-gray-200",
        ToastVariant::Destructive => "toast toast-destructive bg-red-600 text-white",
    };

    html! {
        <div class={classes!(variant_class, "rounded-lg", "shadow-lg", "p-4", "w-80")}>
            <div class="flex items-start justify-between">
                <div>
                    <p class="font-semibold">{ &props.toast.title }</p>
                    <p class="text-sm opacity-90">{ &props.toast.description }</p>
                </div>
                <button class="toast-close ml-2" onclick={on_close}>{"✕"}</button>
            </div>
        </div>
    }
}
