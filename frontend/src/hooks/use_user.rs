use std::rc::Rc;

use shared::user::{UserCache, UserProjection};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

pub enum UserAction {
    /// Authoritative projection from a backend response.
    Replace(UserProjection),
    OptimisticSpinDebit,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserStore {
    pub cache: UserCache,
}

impl Reducible for UserStore {
    type Action = UserAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cache = self.cache.clone();
        match action {
            UserAction::Replace(user) => cache.apply_server_response(user),
            UserAction::OptimisticSpinDebit => cache.optimistic_spin_debit(),
        }
        Rc::new(Self { cache })
    }
}

pub type UserContext = UseReducerHandle<UserStore>;

#[derive(Properties, PartialEq)]
pub struct UserProviderProps {
    pub children: Html,
}

#[function_component(UserProvider)]
pub fn user_provider(props: &UserProviderProps) -> Html {
    let store = use_reducer(UserStore::default);

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_user().await {
                    Ok(user) => dispatcher.dispatch(UserAction::Replace(user)),
                    Err(err) => log::error!("Failed to load user: {}", err),
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<UserContext> context={store}>
            { props.children.clone() }
        </ContextProvider<UserContext>>
    }
}

#[hook]
pub fn use_user() -> UserContext {
    let detached = use_reducer(UserStore::default);
    match use_context::<UserContext>() {
        Some(store) => store,
        None => {
            log::warn!("use_user called outside UserProvider");
            detached
        }
    }
}
