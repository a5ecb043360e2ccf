use super::view_model::SaleFormViewModel;
use crate::layout::toast::ToastService;
use crate::shared::components::ui::{Input, MoneyInput, Switch, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SaleForm(imei: Option<String>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = SaleFormViewModel::new(imei, toasts);
    let navigate = use_navigate();

    let save = move |_| {
        if vm.save_command() {
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <a class="btn btn--ghost" href="/">
                    {icon("arrow-left")}
                    "Voltar"
                </a>
                <h1 class="page__title">
                    {if vm.is_editing { "Editar Venda" } else { "Registrar Nova Venda" }}
                </h1>
                <p class="page__subtitle">
                    {if vm.is_editing {
                        "Atualize as informações da venda"
                    } else {
                        "Cadastre uma nova venda"
                    }}
                </p>
            </header>

            <main class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Informações do Aparelho"</h2>
                        <p class="card__description">"Dados do produto vendido"</p>
                    </div>
                    <div class="card__content">
                        <div class="form__grid">
                            <Input
                                label="Data da Venda".to_string()
                                input_type="date".to_string()
                                value=Signal::derive(move || vm.form.get().date)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.date = value)
                                })
                                id="date".to_string()
                            />
                            <Input
                                label="Aparelho".to_string()
                                value=Signal::derive(move || vm.form.get().device)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.device = value)
                                })
                                placeholder="iPhone 15 Pro Max".to_string()
                                id="device".to_string()
                            />
                            <Input
                                label="Cor".to_string()
                                value=Signal::derive(move || vm.form.get().color)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.color = value)
                                })
                                placeholder="Preto".to_string()
                                id="color".to_string()
                            />
                            <Input
                                label="Condição".to_string()
                                value=Signal::derive(move || vm.form.get().condition)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.condition = value)
                                })
                                placeholder="Novo".to_string()
                                id="condition".to_string()
                            />
                            <Input
                                label="IMEI".to_string()
                                value=Signal::derive(move || vm.form.get().imei)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.imei = value)
                                })
                                placeholder="355678901234567".to_string()
                                disabled=vm.is_editing
                                id="imei".to_string()
                            />
                            <Input
                                label="Fornecedor".to_string()
                                value=Signal::derive(move || vm.form.get().supplier)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.supplier = value)
                                })
                                placeholder="Nome do fornecedor".to_string()
                                id="supplier".to_string()
                            />
                        </div>

                        <Textarea
                            label="Observação".to_string()
                            value=Signal::derive(move || vm.form.get().observation)
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| f.observation = value)
                            })
                            placeholder="Informações adicionais".to_string()
                            id="observation".to_string()
                        />
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Dados do Comprador"</h2>
                        <p class="card__description">"Informações do cliente"</p>
                    </div>
                    <div class="card__content">
                        <div class="form__grid form__grid--2col">
                            <Input
                                label="Nome do Comprador".to_string()
                                value=Signal::derive(move || vm.form.get().buyer)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.buyer = value)
                                })
                                placeholder="João Silva".to_string()
                                id="buyer".to_string()
                            />
                            <Input
                                label="Telefone".to_string()
                                input_type="tel".to_string()
                                value=Signal::derive(move || vm.form.get().buyer_phone)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.buyer_phone = value)
                                })
                                placeholder="+55 (11) 98765-4321".to_string()
                                id="buyer-phone".to_string()
                            />
                        </div>

                        <Switch
                            label="Aparelho Recebido"
                            description="O aparelho já foi recebido do fornecedor?".to_string()
                            checked=Signal::derive(move || vm.form.get().received)
                            on_change=Callback::new(move |checked: bool| {
                                vm.form.update(|f| f.received = checked)
                            })
                            id="received".to_string()
                        />
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Valores Financeiros"</h2>
                        <p class="card__description">"Informações de preço e custos"</p>
                    </div>
                    <div class="card__content">
                        <div class="form__grid">
                            <MoneyInput
                                label="Valor de Compra (R$)"
                                value=Signal::derive(move || vm.form.get().purchase_value)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.purchase_value = value)
                                })
                                id="purchase-value".to_string()
                            />
                            <MoneyInput
                                label="Preço à Vista (R$)"
                                value=Signal::derive(move || vm.form.get().cash_price)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.cash_price = value)
                                })
                                id="cash-price".to_string()
                            />
                            <MoneyInput
                                label="Preço no Cartão (R$)"
                                value=Signal::derive(move || vm.form.get().card_price)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.card_price = value)
                                })
                                id="card-price".to_string()
                            />
                            <MoneyInput
                                label="Valor Recebido (R$)"
                                value=Signal::derive(move || vm.form.get().amount_received)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.amount_received = value)
                                })
                                id="amount-received".to_string()
                            />
                            <MoneyInput
                                label="Valor Entrega (R$)"
                                value=Signal::derive(move || vm.form.get().delivery_fee)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.delivery_fee = value)
                                })
                                id="delivery-fee".to_string()
                            />
                            <MoneyInput
                                label="Capa e Película (R$)"
                                value=Signal::derive(move || vm.form.get().case_fee)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.case_fee = value)
                                })
                                id="case-fee".to_string()
                            />
                            <MoneyInput
                                label="Total da Venda (R$)"
                                value=Signal::derive(move || vm.form.get().total_value)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.total_value = value)
                                })
                                id="total-value".to_string()
                            />
                        </div>
                    </div>
                </div>

                <div class="form__actions">
                    <button class="btn btn--primary btn--large" on:click=save>
                        {icon("save")}
                        {if vm.is_editing { "Salvar Alterações" } else { "Registrar Venda" }}
                    </button>
                    <a class="btn btn--outline btn--large" href="/">
                        "Cancelar"
                    </a>
                </div>
            </main>
        </div>
    }
}
