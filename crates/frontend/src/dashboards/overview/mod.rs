use crate::domain::sales::ui::list::SalesTable;
use crate::domain::stock::ui::list::StockTable;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::{sample_sale_records, sample_stock_items};
use crate::shared::icons::icon;
use contracts::domain::common::Entity;
use contracts::domain::sale_record::SaleRecord;
use contracts::domain::stats::{summarize_sales, summarize_stock};
use contracts::domain::stock_item::StockItem;
use contracts::shared::money::{format_brl, format_percent};
use leptos::prelude::*;

const TAB_OVERVIEW: &str = "overview";
const TAB_STOCK: &str = "stock";
const TAB_SALES: &str = "sales";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (stock, _set_stock) = signal(sample_stock_items());
    let (sales, _set_sales) = signal(sample_sale_records());
    let (active_tab, set_active_tab) = signal(TAB_OVERVIEW.to_string());

    let stock_summary = Signal::derive(move || summarize_stock(&stock.get()));
    let sales_summary = Signal::derive(move || summarize_sales(&sales.get()));
    // Recent-sales preview for the overview tab
    let recent_sales = Signal::derive(move || sales.get().into_iter().take(5).collect::<Vec<_>>());

    let tab_trigger = move |key: &'static str, label: &'static str| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == key {
                        "tabs__trigger tabs__trigger--active"
                    } else {
                        "tabs__trigger"
                    }
                }
                on:click=move |_| set_active_tab.set(key.to_string())
            >
                {label}
            </button>
        }
    };

    let overview_tab = move || {
        view! {
            <div class="tab-panel">
                <div class="stats-grid">
                    <StatCard
                        label="Aparelhos em Estoque".to_string()
                        icon_name="package".to_string()
                        value=Signal::derive(move || stock_summary.get().count.to_string())
                        description=Signal::derive(move || {
                            Some("Total de itens disponíveis".to_string())
                        })
                    />
                    <StatCard
                        label="Valor do Estoque".to_string()
                        icon_name="dollar-sign".to_string()
                        value=Signal::derive(move || format_brl(stock_summary.get().total_value))
                        description=Signal::derive(move || {
                            Some("Valor total investido".to_string())
                        })
                    />
                    <StatCard
                        label="Vendas Concluídas".to_string()
                        icon_name="shopping-cart".to_string()
                        value=Signal::derive(move || {
                            sales_summary.get().completed_count.to_string()
                        })
                        description=Signal::derive(move || {
                            Some(format!("{} pendentes", sales_summary.get().pending_count))
                        })
                    />
                    <StatCard
                        label="Lucro Total".to_string()
                        icon_name="trending-up".to_string()
                        value=Signal::derive(move || format_brl(sales_summary.get().total_profit))
                        description=Signal::derive(move || {
                            Some(format!(
                                "Receita: {}",
                                format_brl(sales_summary.get().total_revenue)
                            ))
                        })
                        trend=Signal::derive(move || {
                            // Margin is undefined without completed sales; the
                            // card simply omits the trend line then
                            let summary = sales_summary.get();
                            summary
                                .profit_margin_pct
                                .map(|margin| (format_percent(margin), summary.profit_positive()))
                        })
                    />
                </div>

                <SalesTable sales=recent_sales />
            </div>
        }
    };

    let stock_tab = move || {
        view! {
            <div class="tab-panel">
                <div class="tab-panel__actions">
                    <a class="btn btn--primary" href="/stock/add">
                        {icon("plus")}
                        "Adicionar ao Estoque"
                    </a>
                </div>
                <StockTable items=stock />
            </div>
        }
    };

    let sales_tab = move || {
        view! {
            <div class="tab-panel">
                <div class="tab-panel__actions">
                    <a class="btn btn--primary" href="/sale/add">
                        {icon("plus")}
                        "Registrar Venda"
                    </a>
                </div>
                <SalesTable sales=sales />
            </div>
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Controle de Estoque"</h1>
                <p class="page__subtitle">"Sistema de gerenciamento de aparelhos"</p>
            </header>

            <main class="page__content">
                <div class="tabs__list">
                    {tab_trigger(TAB_OVERVIEW, "Visão Geral")}
                    {tab_trigger(TAB_STOCK, StockItem::list_name())}
                    {tab_trigger(TAB_SALES, SaleRecord::list_name())}
                </div>

                {move || match active_tab.get().as_str() {
                    TAB_STOCK => stock_tab().into_any(),
                    TAB_SALES => sales_tab().into_any(),
                    _ => overview_tab().into_any(),
                }}
            </main>
        </div>
    }
}
