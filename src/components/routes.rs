use yew_router::Routable;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings/notifications/lunasea")]
    LunaSea,
    #[not_found]
    #[at("/404")]
    NotFound,
}
