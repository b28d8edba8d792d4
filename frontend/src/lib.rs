pub mod ads;
pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::hooks::UserProvider;
use crate::pages::{
    advertise::Advertise, earn::Earn, new_partner_task::NewPartnerTask, new_task::NewTask,
    spin_wheel_page::SpinWheelPage, withdraw::Withdraw,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Spin,
    #[at("/earn")]
    Earn,
    #[at("/withdraw")]
    Withdraw,
    #[at("/advertise")]
    Advertise,
    #[at("/advertise/new-task")]
    NewTask,
    #[at("/advertise/new-partner-task")]
    NewPartnerTask,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Spin | Route::NotFound => html! { <SpinWheelPage /> },
        Route::Earn => html! { <Earn /> },
        Route::Withdraw => html! { <Withdraw /> },
        Route::Advertise => html! { <Advertise /> },
        Route::NewTask => html! { <NewTask /> },
        Route::NewPartnerTask => html! { <NewPartnerTask /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <UserProvider>
                <Base>
                    <Switch<Route> render={switch} />
                </Base>
            </UserProvider>
        </BrowserRouter>
    }
}
