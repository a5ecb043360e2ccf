use crate::layout::toast::ToastService;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::components::ui::Badge;
use crate::shared::components::ui::Select;
use crate::shared::export::download_report;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::stock_item::{
    filter_stock, unique_suppliers, ObservationFilter, StockFilter, StockItem,
};
use contracts::shared::report::stock_report;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

#[component]
pub fn StockTable(#[prop(into)] items: Signal<Vec<StockItem>>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let (search, set_search) = signal(String::new());
    let (supplier, set_supplier) = signal("all".to_string());
    let (observation, set_observation) = signal("all".to_string());

    // One composite predicate over all active criteria, rebuilt per change
    let active_filter = Signal::derive(move || StockFilter {
        query: search.get(),
        supplier: match supplier.get().as_str() {
            "all" => None,
            chosen => Some(chosen.to_string()),
        },
        observation: match observation.get().as_str() {
            "with" => ObservationFilter::With,
            "without" => ObservationFilter::Without,
            _ => ObservationFilter::All,
        },
    });

    let filtered = Signal::derive(move || filter_stock(&items.get(), &active_filter.get()));

    let supplier_options = Signal::derive(move || {
        let mut options = vec![("all".to_string(), "Todos os Fornecedores".to_string())];
        options.extend(
            unique_suppliers(&items.get())
                .into_iter()
                .map(|supplier| (supplier.clone(), supplier)),
        );
        options
    });

    let observation_options = Signal::derive(move || {
        vec![
            ("all".to_string(), "Todas".to_string()),
            ("with".to_string(), "Com Observação".to_string()),
            ("without".to_string(), "Sem Observação".to_string()),
        ]
    });

    let export = move || {
        let report = stock_report(&filtered.get_untracked());
        let filename = format!("estoque-{}.csv", Utc::now().date_naive().format("%Y-%m-%d"));
        match download_report(&report, &filename) {
            Ok(()) => log::info!("Relatório de estoque exportado: {}", filename),
            Err(e) => toasts.error("Exportação falhou", e),
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <div class="card__header-row">
                    <div>
                        <h2 class="card__title">"Estoque Atual"</h2>
                        <p class="card__description">"Aparelhos disponíveis para venda"</p>
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
                    placeholder="Buscar por modelo, cor ou IMEI..."
                />
                <div class="card__filters">
                    <Select
                        value=supplier
                        on_change=Callback::new(move |value: String| set_supplier.set(value))
                        options=supplier_options
                    />
                    <Select
                        value=observation
                        on_change=Callback::new(move |value: String| set_observation.set(value))
                        options=observation_options
                    />
                </div>
            </div>
            <div class="card__content">
                {move || {
                    let rows = filtered.get();
                    if rows.is_empty() {
                        view! {
                            <div class="table-empty">"Nenhum aparelho encontrado"</div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Modelo"</TableHeaderCell>
                                        <TableHeaderCell>"Cor"</TableHeaderCell>
                                        <TableHeaderCell>"IMEI"</TableHeaderCell>
                                        <TableHeaderCell>"Fornecedor"</TableHeaderCell>
                                        <TableHeaderCell>"Valor Unitário"</TableHeaderCell>
                                        <TableHeaderCell>"Observação"</TableHeaderCell>
                                        <TableHeaderCell>"Ações"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows
                                        .into_iter()
                                        .map(|item| {
                                            let imei = item.imei.to_string();
                                            let detail_href = format!("/stock/{}", imei);
                                            let edit_href = format!("/stock/edit/{}", imei);
                                            let unit_value = item.unit_value;
                                            let observation_view = if item.observation.is_empty() {
                                                view! { <span class="text-muted">"-"</span> }.into_any()
                                            } else {
                                                view! {
                                                    <Badge variant="warning".to_string()>{item.observation.clone()}</Badge>
                                                }
                                                .into_any()
                                            };
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="text-strong">{item.model.clone()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{item.color.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="text-mono">{imei.clone()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{item.supplier.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCellMoney value=Signal::derive(move || Some(unit_value)) />
                                                    <TableCell>
                                                        <TableCellLayout>{observation_view}</TableCellLayout>
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
