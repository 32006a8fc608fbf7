use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::quote::catalog;
use crate::quote::contact::{Attachment, ContactField, ATTACHMENT_ADVISORY};
use crate::quote::estimate::{format_brl, ESTIMATED_TIMELINE};
use crate::quote::sink::ConsoleSink;
use crate::quote::wizard::{QuoteWizard, Step};

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum QuoteModalMsg {
    ToggleService(&'static str),
    SetField(ContactField, String),
    FilesPicked(Vec<Attachment>),
    RemoveAttachment(usize),
    Next,
    Back,
    Submit,
    Close,
}

pub struct QuoteModal {
    wizard: QuoteWizard,
    sink: ConsoleSink,
}

impl Component for QuoteModal {
    type Message = QuoteModalMsg;
    type Properties = QuoteModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut wizard = QuoteWizard::new(config::REVIEW_GATE);
        if ctx.props().is_open {
            wizard.open();
        }
        Self {
            wizard,
            sink: ConsoleSink,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let is_open = ctx.props().is_open;
        if is_open != old_props.is_open {
            if is_open {
                self.wizard.open();
            } else if self.wizard.is_open() {
                self.wizard.close();
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result = match msg {
            QuoteModalMsg::ToggleService(id) => self.wizard.toggle_service(id).map(|_| ()),
            QuoteModalMsg::SetField(field, value) => self.wizard.set_field(field, value),
            QuoteModalMsg::FilesPicked(files) => files
                .into_iter()
                .try_for_each(|file| self.wizard.add_attachment(file)),
            QuoteModalMsg::RemoveAttachment(index) => {
                self.wizard.remove_attachment(index).map(|_| ())
            }
            QuoteModalMsg::Next => self.wizard.next().map(|_| ()),
            QuoteModalMsg::Back => self.wizard.back().map(|_| ()),
            QuoteModalMsg::Submit => self.wizard.submit(&mut self.sink).map(|_| ()),
            QuoteModalMsg::Close => {
                self.wizard.close();
                ctx.props().on_close.emit(());
                Ok(())
            }
        };

        if let Err(e) = result {
            debug!("Quote wizard kept its step: {}", e);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.wizard.is_open() {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| QuoteModalMsg::Close);

        html! {
            <div class="quote-overlay">
                <style>
                {r#"
                .quote-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }
                .quote-modal {
                    background: #fff;
                    color: #111827;
                    border-radius: 1rem;
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 1.5rem;
                    animation: quoteSlideIn 0.3s ease-out;
                }
                .dark .quote-modal {
                    background: #1f2937;
                    color: #fff;
                }
                @keyframes quoteSlideIn {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .quote-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .quote-title {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .quote-progress {
                    display: flex;
                    gap: 0.25rem;
                }
                .quote-progress span {
                    height: 0.5rem;
                    width: 2rem;
                    border-radius: 9999px;
                    background: #e5e7eb;
                }
                .quote-progress span.done {
                    background: #2563eb;
                }
                .quote-close {
                    background: none;
                    border: none;
                    color: #6b7280;
                    cursor: pointer;
                }
                .quote-lead {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .dark .quote-lead {
                    color: #d1d5db;
                }
                .service-option {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    margin-bottom: 1rem;
                    transition: all 0.2s ease;
                }
                .service-option.selected {
                    border-color: #2563eb;
                    background: rgba(37, 99, 235, 0.06);
                }
                .service-option .service-icon {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    height: fit-content;
                }
                .service-option.selected .service-icon {
                    color: #2563eb;
                    background: #dbeafe;
                }
                .quote-field {
                    margin-bottom: 1rem;
                }
                .quote-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }
                .quote-field input,
                .quote-field textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    background: transparent;
                    color: inherit;
                    box-sizing: border-box;
                }
                .field-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .upload-box {
                    border: 2px dashed #d1d5db;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    text-align: center;
                }
                .upload-box input {
                    display: none;
                }
                .upload-box label {
                    color: #2563eb;
                    cursor: pointer;
                }
                .upload-note {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .attachment-list {
                    list-style: none;
                    padding: 0;
                    text-align: left;
                }
                .attachment-list li.outside-advisory {
                    color: #d97706;
                }
                .estimate-box {
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .dark .estimate-box {
                    background: rgba(55, 65, 81, 0.5);
                }
                .estimate-total {
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #2563eb;
                }
                .selected-services {
                    list-style: none;
                    padding: 0;
                }
                .selected-services li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .selected-services svg {
                    color: #22c55e;
                }
                .quote-actions {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }
                .quote-actions .primary {
                    margin-left: auto;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .quote-actions .secondary {
                    background: none;
                    border: none;
                    color: #4b5563;
                    cursor: pointer;
                }
                .submit-failure {
                    color: #ef4444;
                    text-align: right;
                    margin-top: 0.5rem;
                }
                .quote-success {
                    text-align: center;
                    padding: 2rem 0;
                }
                .quote-success .badge {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                "#}
                </style>
                <div class="quote-modal">
                    <div class="quote-header">
                        <div class="quote-title">
                            { self.header_text() }
                            if let Some(current) = self.wizard.step().number() {
                                <div class="quote-progress">
                                    { for (1..=Step::TOTAL).map(|i| html! {
                                        <span class={classes!((i <= current).then(|| "done"))}></span>
                                    }) }
                                </div>
                            }
                        </div>
                        <button class="quote-close" onclick={close.clone()}>
                            <Glyph icon={Icon::Close} />
                        </button>
                    </div>
                    if self.wizard.is_submitted() {
                        { self.view_success(close) }
                    } else {
                        { self.view_form(ctx) }
                    }
                </div>
            </div>
        }
    }
}

impl QuoteModal {
    fn header_text(&self) -> String {
        match self.wizard.step().number() {
            Some(n) => format!("Passo {} de {}", n, Step::TOTAL),
            None => "Solicitação Enviada!".to_string(),
        }
    }

    fn view_success(&self, close: Callback<MouseEvent>) -> Html {
        html! {
            <div class="quote-success">
                <div class="badge">
                    <Glyph icon={Icon::Check} size={32} />
                </div>
                <h3>{"Solicitação Enviada com Sucesso!"}</h3>
                <p class="quote-lead">
                    {"Entraremos em contato em breve com um orçamento detalhado. Obrigado por escolher a Daluthi!"}
                </p>
                <div class="quote-actions">
                    <button class="primary" style="margin: 0 auto;" onclick={close}>{"Fechar"}</button>
                </div>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            QuoteModalMsg::Submit
        });
        let back = ctx.link().callback(|_: MouseEvent| QuoteModalMsg::Back);
        let next = ctx.link().callback(|_: MouseEvent| QuoteModalMsg::Next);
        let step = self.wizard.step();

        html! {
            <form {onsubmit}>
                {
                    match step {
                        Step::ServiceSelection => self.view_services(ctx),
                        Step::ContactDetails => self.view_contact(ctx),
                        Step::Review | Step::Submitted => self.view_review(),
                    }
                }
                <div class="quote-actions">
                    if step != Step::ServiceSelection {
                        <button type="button" class="secondary" onclick={back}>{"Voltar"}</button>
                    }
                    if step == Step::ContactDetails || self.wizard.can_advance() {
                        <button type="button" class="primary" onclick={next}>{"Próximo"}</button>
                    }
                    if step == Step::Review {
                        <button type="submit" class="primary">{"Solicitar Orçamento"}</button>
                    }
                </div>
                if let Some(failure) = self.wizard.failure() {
                    <p class="submit-failure">{ failure }</p>
                }
            </form>
        }
    }

    fn view_services(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h3>{"Qual serviço você precisa?"}</h3>
                <p class="quote-lead">{"Selecione um ou mais serviços que deseja contratar."}</p>
                { for catalog::list().iter().map(|service| {
                    let id = service.id;
                    let selected = self.wizard.selection().is_selected(id);
                    let onclick = ctx.link().callback(move |_: MouseEvent| QuoteModalMsg::ToggleService(id));
                    html! {
                        <div class={classes!("service-option", selected.then(|| "selected"))} {onclick}>
                            <div class="service-icon">
                                <Glyph icon={Icon::from(service.icon)} />
                            </div>
                            <div>
                                <h4>{ service.title }</h4>
                                <p class="quote-lead" style="margin: 0;">{ service.description }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn view_text_field(&self, ctx: &Context<Self>, field: ContactField, input_type: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuoteModalMsg::SetField(field, input.value())
        });
        html! {
            <div class="quote-field">
                <label>{ field.label() }</label>
                <input
                    type={input_type}
                    value={self.wizard.contact().field(field).to_string()}
                    {oninput}
                />
                { self.view_error(field) }
            </div>
        }
    }

    fn view_error(&self, field: ContactField) -> Html {
        match self.wizard.error_for(field) {
            Some(message) => html! { <p class="field-error">{ message }</p> },
            None => html! {},
        }
    }

    fn view_contact(&self, ctx: &Context<Self>) -> Html {
        let on_description = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            QuoteModalMsg::SetField(ContactField::Description, input.value())
        });
        let on_files = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut picked = Vec::new();
            if let Some(files) = input.files() {
                for i in 0..files.length() {
                    if let Some(file) = files.get(i) {
                        picked.push(Attachment::new(file.name(), file.size() as u64, file.type_()));
                    }
                }
            }
            input.set_value("");
            QuoteModalMsg::FilesPicked(picked)
        });

        html! {
            <div>
                <h3>{"Conte mais sobre o seu projeto"}</h3>
                <p class="quote-lead">
                    {"Preencha os campos abaixo para que possamos entender melhor suas necessidades."}
                </p>
                { self.view_text_field(ctx, ContactField::Name, "text") }
                { self.view_text_field(ctx, ContactField::Email, "email") }
                { self.view_text_field(ctx, ContactField::Phone, "tel") }
                { self.view_text_field(ctx, ContactField::Company, "text") }
                <div class="quote-field">
                    <label>{ ContactField::Description.label() }</label>
                    <textarea
                        rows="4"
                        placeholder="Descreva o seu projeto, objetivos, prazos e qualquer informação relevante."
                        value={self.wizard.contact().description.clone()}
                        oninput={on_description}
                    />
                    { self.view_error(ContactField::Description) }
                </div>
                <div class="quote-field">
                    <label>{"Anexar Arquivos (opcional)"}</label>
                    <div class="upload-box">
                        <Glyph icon={Icon::Upload} />
                        <input type="file" multiple={true} id="file-upload" onchange={on_files} />
                        <label for="file-upload">{"Clique para fazer upload"}</label>
                        <p class="upload-note">{ ATTACHMENT_ADVISORY }</p>
                        { self.view_attachments(ctx) }
                    </div>
                </div>
            </div>
        }
    }

    fn view_attachments(&self, ctx: &Context<Self>) -> Html {
        let attachments = &self.wizard.contact().attachments;
        if attachments.is_empty() {
            return html! {};
        }
        html! {
            <ul class="attachment-list">
                { for attachments.iter().enumerate().map(|(index, file)| {
                    let remove = ctx.link().callback(move |_: MouseEvent| QuoteModalMsg::RemoveAttachment(index));
                    html! {
                        <li class={classes!((!file.within_advisory()).then(|| "outside-advisory"))}>
                            { format!("{} ({} KB) ", file.name, file.size_bytes / 1024) }
                            <button type="button" class="quote-close" onclick={remove}>
                                <Glyph icon={Icon::Close} size={14} />
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    }

    fn view_review(&self) -> Html {
        html! {
            <div>
                <h3>{"Prévia do Orçamento"}</h3>
                <p class="quote-lead">
                    {"Com base nas informações fornecidas, aqui está uma estimativa inicial do valor do projeto."}
                </p>
                <div class="estimate-box">
                    <div class="estimate-total">{ format_brl(self.wizard.estimate()) }</div>
                    <p class="upload-note" style="text-align: center;">{"Valor estimado inicial"}</p>
                    <h4>{"Serviços Selecionados:"}</h4>
                    <ul class="selected-services">
                        { for self.wizard.selection().offerings().map(|service| html! {
                            <li>
                                <Glyph icon={Icon::Check} size={16} />
                                <span>{ service.title }</span>
                            </li>
                        }) }
                    </ul>
                    <h4>{"Prazo Estimado:"}</h4>
                    <p>{ ESTIMATED_TIMELINE }</p>
                </div>
                <p class="upload-note">
                    {"Este valor é uma estimativa inicial. Um orçamento detalhado será enviado após a análise do seu projeto."}
                </p>
            </div>
        }
    }
}
