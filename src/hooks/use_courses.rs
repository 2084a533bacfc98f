use yew::prelude::*;

use crate::hooks::use_toast;
use crate::models::NewCourse;
use crate::stores::CourseCatalog;

#[derive(Clone, PartialEq)]
pub struct UseCoursesHandle {
    pub catalog: UseStateHandle<CourseCatalog>,
    pub add: Callback<NewCourse>,
    pub remove: Callback<i64>,
}

/// CRUD over the admin course list. Purely local state, reported via toast.
#[hook]
pub fn use_courses() -> UseCoursesHandle {
    let toast = use_toast();
    let catalog = use_state(CourseCatalog::seeded);

    let add = {
        let catalog = catalog.clone();
        let toast = toast.clone();
        Callback::from(move |draft: NewCourse| {
            let mut next = (*catalog).clone();
            match next.add(draft) {
                Ok(course) => {
                    toast.toast(
                        "Course Created",
                        &format!("\"{}\" has been added.", course.title),
                    );
                    catalog.set(next);
                }
                Err(msg) => {
                    toast.toast_destructive("Missing Fields", &msg);
                }
            }
        })
    };

    let remove = {
        let catalog = catalog.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            let mut next = (*catalog).clone();
            if let Some(removed) = next.remove(id) {
                toast.toast(
                    "Course Deleted",
                    &format!("\"{}\" has been removed from the system.", removed.title),
                );
                catalog.set(next);
            }
        })
    };

    UseCoursesHandle {
        catalog,
        add,
        remove,
    }
}
