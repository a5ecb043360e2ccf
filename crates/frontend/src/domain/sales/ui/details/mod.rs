use crate::shared::data::sample_sale_records;
use crate::shared::icons::icon;
use contracts::domain::common::find_by_imei;
use contracts::domain::sale_record::SaleRecord;
use contracts::shared::dates::format_date_br;
use contracts::shared::money::{format_brl, format_brl_opt};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn SaleDetailPage() -> impl IntoView {
    let params = use_params_map();

    let sale = Signal::derive(move || {
        let imei = params.with(|p| p.get("imei")).unwrap_or_default();
        find_by_imei(&sample_sale_records(), &imei).cloned()
    });

    view! {
        {move || match sale.get() {
            Some(record) => sale_detail(record).into_any(),
            None => not_found().into_any(),
        }}
    }
}

fn not_found() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="card card--narrow">
                <div class="card__header">
                    <h2 class="card__title">"Venda não encontrada"</h2>
                    <p class="card__description">"A venda solicitada não foi encontrada."</p>
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

fn sale_detail(sale: SaleRecord) -> impl IntoView {
    let edit_href = format!("/sale/edit/{}", sale.imei);

    // Unrealized amounts stay hidden until the device is received
    let sale_total = sale.received.then_some(sale.total_value);
    let profit = sale.received.then(|| sale.profit());
    let profit_class = if profit.unwrap_or(0.0) > 0.0 {
        "details-highlight details-highlight--positive"
    } else {
        "details-highlight details-highlight--negative"
    };

    let status_view = if sale.received {
        view! {
            <span class="badge badge--status badge--status-completed badge--large">
                {icon("check-circle")}
                "Aparelho Recebido"
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="badge badge--status badge--status-pending badge--large">
                {icon("x-circle")}
                "Aguardando Recebimento"
            </span>
        }
        .into_any()
    };

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
                            {icon("shopping-cart")}
                            "Detalhes da Venda"
                        </h1>
                        <p class="page__subtitle">"Informações completas da transação"</p>
                    </div>
                    <a class="btn btn--primary" href=edit_href.clone()>
                        {icon("edit")}
                        "Editar"
                    </a>
                </div>
            </header>

            <main class="page__content">
                <div class="details-status-row">
                    {status_view}
                    <div class="details-status-row__date">
                        <p class="details-field__label">"Data da Venda"</p>
                        <p class="details-field__value text-strong">{format_date_br(sale.date)}</p>
                    </div>
                </div>

                <div class="details-grid">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">
                                {icon("shopping-cart")}
                                "Informações do Aparelho"
                            </h2>
                            <p class="card__description">"Dados do produto vendido"</p>
                        </div>
                        <div class="card__content details-fields">
                            <div class="details-field">
                                <p class="details-field__label">"Aparelho"</p>
                                <p class="details-field__value text-strong">{sale.device.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Cor"</p>
                                <p class="details-field__value">{sale.color.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Condição"</p>
                                <p class="details-field__value">{sale.condition.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"IMEI"</p>
                                <p class="details-field__value text-mono">{sale.imei.to_string()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Fornecedor"</p>
                                <p class="details-field__value">{sale.supplier.clone()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">
                                {icon("user")}
                                "Dados do Comprador"
                            </h2>
                            <p class="card__description">"Informações do cliente"</p>
                        </div>
                        <div class="card__content details-fields">
                            <div class="details-field">
                                <p class="details-field__label">"Nome"</p>
                                <p class="details-field__value text-strong">{sale.buyer.clone()}</p>
                            </div>
                            <div class="details-field">
                                <p class="details-field__label">"Telefone"</p>
                                <p class="details-field__value">{sale.buyer_phone.clone()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card details-grid__full">
                        <div class="card__header">
                            <h2 class="card__title">
                                {icon("dollar-sign")}
                                "Informações Financeiras"
                            </h2>
                            <p class="card__description">"Valores e lucro da venda"</p>
                        </div>
                        <div class="card__content details-money-grid">
                            <div class="details-fields">
                                <div class="details-field">
                                    <p class="details-field__label">"Valor de Compra"</p>
                                    <p class="details-field__value text-strong">
                                        {format_brl(sale.purchase_value)}
                                    </p>
                                </div>
                                <div class="details-field">
                                    <p class="details-field__label">"Preço à Vista"</p>
                                    <p class="details-field__value">{format_brl(sale.cash_price)}</p>
                                </div>
                                <div class="details-field">
                                    <p class="details-field__label">"Preço no Cartão"</p>
                                    <p class="details-field__value">{format_brl(sale.card_price)}</p>
                                </div>
                            </div>
                            <div class="details-fields">
                                <div class="details-field">
                                    <p class="details-field__label">"Valor Recebido"</p>
                                    <p class="details-field__value details-field__value--highlight">
                                        {format_brl(sale.amount_received)}
                                    </p>
                                </div>
                                <div class="details-field">
                                    <p class="details-field__label">"Valor Entrega"</p>
                                    <p class="details-field__value">{format_brl(sale.delivery_fee)}</p>
                                </div>
                                <div class="details-field">
                                    <p class="details-field__label">"Capa e Película"</p>
                                    <p class="details-field__value">{format_brl(sale.case_fee)}</p>
                                </div>
                            </div>
                            <div class="details-fields">
                                <div class="details-highlight details-highlight--primary">
                                    <p class="details-field__label">"Total da Venda"</p>
                                    <p class="details-highlight__value">
                                        {format_brl_opt(sale_total)}
                                    </p>
                                </div>
                                <div class=profit_class>
                                    <p class="details-field__label">"Lucro"</p>
                                    <p class="details-highlight__value">{format_brl_opt(profit)}</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    {(!sale.observation.is_empty()).then(|| view! {
                        <div class="card details-grid__full">
                            <div class="card__header">
                                <h2 class="card__title">"Observações"</h2>
                                <p class="card__description">
                                    "Informações adicionais sobre a venda"
                                </p>
                            </div>
                            <div class="card__content">
                                <p class="details-observation">{sale.observation.clone()}</p>
                            </div>
                        </div>
                    })}
                </div>

                <div class="page__actions">
                    <a class="btn btn--primary" href=edit_href>
                        {icon("edit")}
                        "Editar Venda"
                    </a>
                    <a class="btn btn--outline" href="/">
                        "Voltar para Vendas"
                    </a>
                </div>
            </main>
        </div>
    }
}
