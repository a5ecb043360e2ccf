use crate::shared::data::sample_stock_items;
use crate::shared::icons::icon;
use contracts::domain::common::find_by_imei;
use contracts::domain::stock_item::StockItem;
use contracts::shared::money::format_brl;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn StockDetailPage() -> impl IntoView {
    let params = use_params_map();

    let device = Signal::derive(move || {
        let imei = params.with(|p| p.get("imei")).unwrap_or_default();
        find_by_imei(&sample_stock_items(), &imei).cloned()
    });

    view! {
        {move || match device.get() {
            Some(item) => stock_detail(item).into_any(),
            None => not_found().into_any(),
        }}
    }
}

fn not_found() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="card card--narrow">
                <div class="card__header">
                    <h2 class="card__title">"Produto não encontrado"</h2>
                    <p class="card__description">
                        "O produto solicitado não foi encontrado no estoque."
                    </p>
                </div>
                <div class="card__content">
                    <a class="btn btn--primary btn--block" href="/">
                        {icon("arrow-left")}
                        "Voltar para início"
                    </a>
                </div>
            </div>
        </div>
    }
}

fn stock_detail(item: StockItem) -> impl IntoView {
    let edit_href = format!("/stock/edit/{}", item.imei);

    view! {
        <div class="page">
            <header class="page__header">
                <a class="btn btn--ghost" href="/">
                    {icon("arrow-left")}
                    "Voltar"
                </a>
                <div class="page__header-row">
                    <div>
                        <h1 class="page__title">
                            {icon("package")}
                            "Detalhes do Produto"
                        </h1>
                        <p class="page__subtitle">"Informações completas do item em estoque"</p>
                    </div>
                    <a class="btn btn--primary" href=edit_href.clone()>
                        {icon("edit")}
                        "Editar"
                    </a>
                </div>
            </header>

            <main class="page__content">
                <div class="details-grid">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Informações do Aparelho"</h2>
                            <p class="card__description">"Dados técnicos e identificação"</p>
                        </div>
                        <div class="card__content details-fields">
                            <div class="details-field">
                                <p class="details-field__label">"Modelo"</p>
                                <p class="details-field__value text-strong">{item.model.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Cor"</p>
                                <p class="details-field__value">{item.color.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"IMEI"</p>
                                <p class="details-field__value text-mono">{item.imei.to_string()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Fornecedor"</p>
                                <p class="details-field__value">{item.supplier.clone()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Informações Financeiras"</h2>
                            <p class="card__description">"Valores e estoque"</p>
                        </div>
                        <div class="card__content details-fields">
                            <div class="details-field">
                                <p class="details-field__label">"Valor Unitário"</p>
                                <p class="details-field__value details-field__value--highlight">
                                    {format_brl(item.unit_value)}
                                </p>
                            </div>
                            {item.total_stock_value.map(|total| view! {
                                <div class="details-field">
                                    <p class="details-field__label">"Valor Total em Estoque"</p>
                                    <p class="details-field__value text-strong">
                                        {format_brl(total)}
                                    </p>
                                </div>
                            })}
                        </div>
                    </div>

                    {(!item.observation.is_empty()).then(|| view! {
                        <div class="card details-grid__full">
                            <div class="card__header">
                                <h2 class="card__title">"Observações"</h2>
                                <p class="card__description">
                                    "Informações adicionais sobre o aparelho"
                                </p>
                            </div>
                            <div class="card__content">
                                <p class="details-observation">{item.observation.clone()}</p>
                            </div>
                        </div>
                    })}
                </div>

                <div class="page__actions">
                    <a class="btn btn--primary" href=edit_href>
                        {icon("edit")}
                        "Editar Produto"
                    </a>
                    <a class="btn btn--outline" href="/">
                        "Voltar para Estoque"
                    </a>
                </div>
            </main>
        </div>
    }
}
