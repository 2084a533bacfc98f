use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum ContentKind {
    Video,
    Audio,
    Pdf,
}

impl ContentKind {
    fn icon(&self) -> &'static str {
        match self {
            ContentKind::Video => "🎬",
            ContentKind::Audio => "🎧",
            ContentKind::Pdf => "📄",
        }
    }
}

struct ContentItem {
    title: &'static str,
    kind: ContentKind,
    meta: &'static str,
    description: &'static str,
}

/// Course browser: a content list on the left, a detail pane driven by the
/// local selection on the right.
#[function_component(CourseContent)]
pub fn course_content() -> Html {
    let selected = use_state(|| None::<usize>);

    let items = [
        ContentItem {
            title: "Introduction to Algebra",
            kind: ContentKind::Video,
            meta: "15:30",
            description: "Learn the basics of variables and equations",
        },
        ContentItem {
            title: "Fractions Explained",
            kind: ContentKind::Audio,
            meta: "12:45",
            description: "Understanding numerators and denominators",
        },
        ContentItem {
            title: "Practice Problems Guide",
            kind: ContentKind::Pdf,
            meta: "25 pages",
            description: "Comprehensive exercise collection with solutions",
        },
    ];

    let detail = selected.map(|index| &items[index]);

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{"Maths for Beginners"}</h1>
                <p class="text-gray-600 mt-2">{"Master maths from fundamentals to advanced concepts"}</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-1">
                    <div class="card">
                        <div class="card-header"><h2 class="card-title">{"Course Content"}</h2></div>
                        <div class="card-content space-y-2">
                            { for items.iter().enumerate().map(|(index, item)| {
                                let is_selected = *selected == Some(index);
                                let on_select = {
                                    let selected = selected.clone();
                                    Callback::from(move |_| selected.set(Some(index)))
                                };
                                html! {
                                    <div
                                        class={classes!(
                                            "content-item", "p-3", "rounded-lg", "cursor-pointer",
                                            is_selected.then_some("content-item-selected")
                                        )}
                                        onclick={on_select}
                                    >
                                        <div class="flex items-center space-x-3">
                                            <span>{ item.kind.icon() }</span>
                                            <div class="flex-1">
                                                <h3 class="font-medium text-gray-900">{ item.title }</h3>
                                                <p class="text-sm text-gray-600">{ item.meta }</p>
                                            </div>
                                            if is_selected {
                                                <span>{"▶"}</span>
                                            }
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </div>

                <div class="lg:col-span-2">
                    <div class="card h-full">
                        <div class="card-content p-6">
                            {
                                match detail {
                                    Some(item) => html! {
                                        <div class="space-y-4">
                                            <div class="flex items-center justify-between">
                                                <h2 class="text-xl font-semibold">{ item.title }</h2>
                                                <button class="btn-outline btn-sm">{"Download"}</button>
                                            </div>
                                            <p class="text-gray-600">{ item.description }</p>
                                            <div class="bg-gray-100 rounded-lg p-8 flex items-center justify-center min-h-[400px]">
                                                <div class="text-center">
                                                    <span class="text-6xl">{ item.kind.icon() }</span>
                                                    <p class="text-lg font-medium mt-4">
                                                        { match item.kind {
                                                            ContentKind::Video => "Video Player",
                                                            ContentKind::Audio => "Audio Content",
                                                            ContentKind::Pdf => "PDF Document",
                                                        } }
                                                    </p>
                                                    <p class="text-gray-600">{ item.meta }</p>
                                                </div>
                                            </div>
                                        </div>
                                    },
                                    None => html! {
                                        <div class="flex items-center justify-center h-96 text-gray-500">
                                            <div class="text-center">
                                                <span class="text-6xl opacity-50">{"📚"}</span>
                                                <p class="text-lg mt-4">{"Select content to view"}</p>
                                                <p class="text-sm">{"Choose from the course content list"}</p>
                                            </div>
                                        </div>
                                    },
                                }
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
