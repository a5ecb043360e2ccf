use super::condition_badge_variant;
use crate::layout::toast::ToastService;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::components::ui::{Badge, Select, StatusBadge};
use crate::shared::export::download_report;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::sale_record::{filter_sales, SaleRecord, SalesFilter, StatusFilter};
use contracts::enums::Condition;
use contracts::shared::dates::format_date_br;
use contracts::shared::report::sales_report;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

#[component]
pub fn SalesTable(#[prop(into)] sales: Signal<Vec<SaleRecord>>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal("all".to_string());
    let (condition, set_condition) = signal("all".to_string());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());

    // One composite predicate over all active criteria, rebuilt per change
    let active_filter = Signal::derive(move || SalesFilter {
        query: search.get(),
        status: match status.get().as_str() {
            "completed" => StatusFilter::Completed,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        },
        condition: match condition.get().as_str() {
            "all" => None,
            chosen => Some(chosen.to_string()),
        },
        date_from: date_from.get(),
        date_to: date_to.get(),
    });

    let filtered = Signal::derive(move || filter_sales(&sales.get(), &active_filter.get()));

    let status_options = Signal::derive(move || {
        vec![
            ("all".to_string(), "Todos os Status".to_string()),
            ("completed".to_string(), "Concluído".to_string()),
            ("pending".to_string(), "Pendente".to_string()),
        ]
    });

    let condition_options = Signal::derive(move || {
        let mut options = vec![("all".to_string(), "Todas as Condições".to_string())];
        options.extend(
            Condition::all()
                .into_iter()
                .map(|c| (c.label().to_string(), c.label().to_string())),
        );
        options
    });

    let export = move || {
        let report = sales_report(&filtered.get_untracked());
        let filename = format!("vendas-{}.csv", Utc::now().date_naive().format("%Y-%m-%d"));
        match download_report(&report, &filename) {
            Ok(()) => log::info!("Relatório de vendas exportado: {}", filename),
            Err(e) => toasts.error("Exportação falhou", e),
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <div class="card__header-row">
                    <div>
                        <h2 class="card__title">"Vendas Realizadas"</h2>
                        <p class="card__description">"Histórico de aparelhos vendidos"</p>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| export()
                    >
                        {icon("file-down")}
                        "Exportar CSV"
                    </Button>
                </div>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value: String| set_search.set(value))
                    placeholder="Buscar por aparelho, comprador ou IMEI..."
                />
                <div class="card__filters">
                    <DateInput
                        value=date_from
                        on_change=move |value| set_date_from.set(value)
                        title="Data inicial".to_string()
                    />
                    <DateInput
                        value=date_to
                        on_change=move |value| set_date_to.set(value)
                        title="Data final".to_string()
                    />
                    <Select
                        value=status
                        on_change=Callback::new(move |value: String| set_status.set(value))
                        options=status_options
                    />
                    <Select
                        value=condition
                        on_change=Callback::new(move |value: String| set_condition.set(value))
                        options=condition_options
                    />
                </div>
            </div>
            <div class="card__content">
                {move || {
                    let rows = filtered.get();
                    if rows.is_empty() {
                        view! {
                            <div class="table-empty">"Nenhuma venda encontrada"</div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Data"</TableHeaderCell>
                                        <TableHeaderCell>"Aparelho"</TableHeaderCell>
                                        <TableHeaderCell>"Condição"</TableHeaderCell>
                                        <TableHeaderCell>"Comprador"</TableHeaderCell>
                                        <TableHeaderCell>"Valor Compra"</TableHeaderCell>
                                        <TableHeaderCell>"Valor Venda"</TableHeaderCell>
                                        <TableHeaderCell>"Lucro"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Ações"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows
                                        .into_iter()
                                        .map(|sale| {
                                            let imei = sale.imei.to_string();
                                            let detail_href = format!("/sale/{}", imei);
                                            let edit_href = format!("/sale/edit/{}", imei);
                                            let condition_variant =
                                                condition_badge_variant(&sale.condition).to_string();
                                            let purchase_value = sale.purchase_value;
                                            let received = sale.received;
                                            // Unrealized amounts stay hidden until reception
                                            let sale_total = sale.received.then_some(sale.total_value);
                                            let profit = sale.received.then(|| sale.profit());
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="text-strong">
                                                                {format_date_br(sale.date)}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>
                                                                <div class="text-strong">{sale.device.clone()}</div>
                                                                <div class="text-muted">{sale.color.clone()}</div>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <Badge variant=condition_variant>
                                                                {sale.condition.clone()}
                                                            </Badge>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>
                                                                <div class="text-strong">{sale.buyer.clone()}</div>
                                                                <div class="text-muted">{sale.buyer_phone.clone()}</div>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCellMoney value=Signal::derive(move || Some(purchase_value)) />
                                                    <TableCellMoney value=Signal::derive(move || sale_total) />
                                                    <TableCellMoney
                                                        value=Signal::derive(move || profit)
                                                        color_by_sign=true
                                                        bold=true
                                                    />
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <StatusBadge received=Signal::derive(move || received) />
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="row-actions">
                                                                <a class="btn-icon" href=detail_href title="Detalhes">
                                                                    {icon("eye")}
                                                                </a>
                                                                <a class="btn-icon" href=edit_href title="Editar">
                                                                    {icon("edit")}
                                                                </a>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()}
                                </TableBody>
                            </Table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
