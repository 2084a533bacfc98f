use yew::prelude::*;

use crate::hooks::use_toast;
use crate::models::NewUser;
use crate::services::TableClient;
use crate::stores::UserDirectory;
use crate::utils::TABLE_USER_MANAGEMENT;

#[derive(Clone, PartialEq)]
pub struct UseUsersHandle {
    pub directory: UseStateHandle<UserDirectory>,
    pub add: Callback<NewUser>,
    pub remove: Callback<i64>,
    pub toggle_status: Callback<i64>,
}

/// CRUD over the admin user list. Mutations hit local state first; new rows
/// are additionally written to the `user_management` table, and a failed
/// write is reported once without rolling back.
#[hook]
pub fn use_users() -> UseUsersHandle {
    let toast = use_toast();
    let directory = use_state(UserDirectory::seeded);

    let add = {
        let directory = directory.clone();
        let toast = toast.clone();
        Callback::from(move |draft: NewUser| {
            let mut next = (*directory).clone();
            match next.add(draft) {
                Ok(record) => {
                    toast.toast("User Added", &format!("\"{}\" has been added.", record.name));
                    directory.set(next);

                    let toast = toast.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let client = TableClient::new(TABLE_USER_MANAGEMENT);
                        if let Err(e) = client.insert(&record).await {
                            log::error!("❌ Failed to persist user record: {}", e);
                            toast.toast_destructive(
                                "Sync Failed",
                                "The user was added locally but could not be saved to the server.",
                            );
                        }
                    });
                }
                Err(msg) => {
                    toast.toast_destructive("Missing Fields", &msg);
                }
            }
        })
    };

    let remove = {
        let directory = directory.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            let mut next = (*directory).clone();
            if let Some(removed) = next.remove(id) {
                toast.toast(
                    "User Deleted",
                    &format!("{} has been removed from the system.", removed.name),
                );
                directory.set(next);
            }
        })
    };

    let toggle_status = {
        let directory = directory.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            let mut next = (*directory).clone();
            if let Some(updated) = next.toggle_status(id) {
                toast.toast(
                    "Status Updated",
                    &format!("{} is now {}.", updated.name, updated.status),
                );
                directory.set(next);
            }
        })
    };

    UseUsersHandle {
        directory,
        add,
        remove,
        toggle_status,
    }
}
