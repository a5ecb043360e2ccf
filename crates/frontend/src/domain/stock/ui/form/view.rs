use super::view_model::StockFormViewModel;
use crate::layout::toast::ToastService;
use crate::shared::components::ui::{Input, MoneyInput, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn StockForm(imei: Option<String>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = StockFormViewModel::new(imei, toasts);
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
                    {if vm.is_editing { "Editar Produto" } else { "Adicionar ao Estoque" }}
                </h1>
                <p class="page__subtitle">
                    {if vm.is_editing {
                        "Atualize as informações do produto"
                    } else {
                        "Cadastre um novo produto no estoque"
                    }}
                </p>
            </header>

            <main class="page__content">
                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">
                            {if vm.is_editing { "Editar Dados" } else { "Dados do Produto" }}
                        </h2>
                        <p class="card__description">
                            "Preencha os campos abaixo com as informações do aparelho"
                        </p>
                    </div>
                    <div class="card__content">
                        {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

                        <div class="form__grid">
                            <Input
                                label="Modelo".to_string()
                                value=Signal::derive(move || vm.form.get().model)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.model = value)
                                })
                                placeholder="iPhone 13 128GB".to_string()
                                id="model".to_string()
                            />
                            <Input
                                label="Cor".to_string()
                                value=Signal::derive(move || vm.form.get().color)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.color = value)
                                })
                                placeholder="PRETO".to_string()
                                id="color".to_string()
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
                            <Input
                                label="IMEI".to_string()
                                value=Signal::derive(move || vm.form.get().imei)
                                on_input=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.imei = value)
                                })
                                placeholder="359451183944323".to_string()
                                disabled=vm.is_editing
                                id="imei".to_string()
                            />
                            <MoneyInput
                                label="Valor Unitário (R$)"
                                value=Signal::derive(move || vm.form.get().unit_value)
                                on_input=Callback::new(move |value: f64| {
                                    vm.form.update(|f| f.unit_value = value)
                                })
                                placeholder="2300.00".to_string()
                                id="unit-value".to_string()
                            />
                        </div>

                        <Textarea
                            label="Observação".to_string()
                            value=Signal::derive(move || vm.form.get().observation)
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| f.observation = value)
                            })
                            placeholder="Informações adicionais sobre o aparelho".to_string()
                            id="observation".to_string()
                        />

                        <div class="form__actions">
                            <button class="btn btn--primary" on:click=save>
                                {icon("save")}
                                {if vm.is_editing { "Salvar Alterações" } else { "Adicionar ao Estoque" }}
                            </button>
                            <a class="btn btn--outline" href="/">
                                "Cancelar"
                            </a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
