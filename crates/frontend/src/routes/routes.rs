use crate::dashboards::overview::DashboardPage;
use crate::domain::sales::ui::details::SaleDetailPage;
use crate::domain::sales::ui::form::{AddSalePage, EditSalePage};
use crate::domain::stock::ui::details::StockDetailPage;
use crate::domain::stock::ui::form::{AddStockPage, EditStockPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page__content">"Página não encontrada"</div> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/stock/add") view=AddStockPage />
                <Route path=path!("/stock/edit/:imei") view=EditStockPage />
                <Route path=path!("/stock/:imei") view=StockDetailPage />
                <Route path=path!("/sale/add") view=AddSalePage />
                <Route path=path!("/sale/edit/:imei") view=EditSalePage />
                <Route path=path!("/sale/:imei") view=SaleDetailPage />
            </Routes>
        </Router>
    }
}
