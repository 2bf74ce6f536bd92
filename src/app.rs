use crate::{
    config::{RenderOptions, EXPORT_FILENAME},
    content::{ContentType, Field, FieldDescriptor},
    export,
    form::{CodeDisplay, Color, FormState},
    qr_generator,
};
use wasm_bindgen::JsValue;
use web_sys::{console, HtmlCanvasElement};
use yew::prelude::*;

pub struct Main {
    link: ComponentLink<Self>,
    state: FormState,
    options: RenderOptions,
    canvas: NodeRef,
    /// Whether the canvas currently holds the code for the payload.
    painted: bool,
}

pub enum Msg {
    SelectType(String),
    Input(Field, String),
    SetColor(String),
    Generate,
    DownloadPng,
}

impl Main {
    fn apply(&mut self, update: impl FnOnce(FormState) -> FormState) {
        self.state = update(std::mem::take(&mut self.state));
    }

    fn paint_code(&mut self) {
        self.painted = false;
        let (payload, color) = match self.state.display() {
            CodeDisplay::CodeDisplayed { payload, color } => (payload, color),
            CodeDisplay::NoCodeDisplayed => return,
        };
        let canvas = match self.canvas.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        match qr_generator::paint_payload(&canvas, payload, color, &self.options) {
            Ok(true) => self.painted = true,
            Ok(false) => {
                console::error_2(
                    &JsValue::from_str("Payload does not fit into a QR code, bytes:"),
                    &JsValue::from_f64(payload.len() as f64),
                );
            }
            Err(err) => {
                console::error_2(&JsValue::from_str("Failed drawing QR code:"), &err);
            }
        }
    }

    fn view_type_selector(&self) -> Html {
        let current = self.state.content_type;
        html! {
            <label class="type">
                { "Content type" }
                <select onchange=self.link.batch_callback(|e: ChangeData| match e {
                    ChangeData::Select(select) => vec![Msg::SelectType(select.value())],
                    _ => vec![],
                })>
                    { for ContentType::ALL.iter().map(|kind| {
                        let descriptor = kind.descriptor();
                        html! {
                            <option value=descriptor.tag selected={ *kind == current }>
                                { format!("{} {}", descriptor.icon, descriptor.label) }
                            </option>
                        }
                    }) }
                </select>
            </label>
        }
    }

    fn view_input(&self, input: &'static FieldDescriptor) -> Html {
        let field = input.field;
        html! {
            <div class="input">
                <span class="icon">{ input.icon }</span>
                <input
                    type=input.input_type
                    name=field.key()
                    placeholder=input.placeholder
                    value=self.state.fields.raw(field).to_owned()
                    oninput=self.link.callback(move |e: InputData| Msg::Input(field, e.value))
                />
            </div>
        }
    }

    fn view_swatch(&self, preset: Color) -> Html {
        let class = if self.state.color.is_preset(preset.as_str()) {
            "swatch selected"
        } else {
            "swatch"
        };
        let style = format!("background-color: {}", preset.as_str());
        let value = preset.as_str().to_owned();
        html! {
            <button
                type="button"
                class=class
                style=style
                title=preset.as_str().to_owned()
                onclick=self.link.callback(move |_| Msg::SetColor(value.clone()))
            ></button>
        }
    }

    fn view_code(&self) -> Html {
        match self.state.display() {
            CodeDisplay::NoCodeDisplayed => html! {},
            CodeDisplay::CodeDisplayed { payload, .. } => html! {
                <div class="result">
                    <div class="code">
                        <canvas ref=self.canvas.clone()></canvas>
                    </div>
                    <p class="payload">
                        <span class="caption">{ "QR for:" }</span>
                        { " " }
                        { payload }
                    </p>
                    <button type="button" class="download" onclick=self.link.callback(|_| Msg::DownloadPng)>
                        { "⬇️ Download PNG" }
                    </button>
                </div>
            },
        }
    }
}

impl Component for Main {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        Self {
            link,
            state: FormState::default(),
            options: RenderOptions::default(),
            canvas: NodeRef::default(),
            painted: false,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::SelectType(tag) => match ContentType::from_tag(&tag) {
                Some(content_type) => self.apply(|state| state.with_type(content_type)),
                None => {
                    console::log_2(
                        &JsValue::from_str("Unknown content type:"),
                        &JsValue::from_str(&tag),
                    );
                    return false;
                }
            },
            Msg::Input(field, value) => {
                self.apply(|state| state.with_field(field, value));
                // the input element already shows what was typed
                return false;
            }
            Msg::SetColor(color) => self.apply(|state| state.with_color(Color::new(color))),
            Msg::Generate => self.apply(FormState::submitted),
            Msg::DownloadPng => {
                let canvas = if self.painted {
                    self.canvas.cast::<HtmlCanvasElement>()
                } else {
                    None
                };
                if let Err(err) = export::download_png(canvas, EXPORT_FILENAME) {
                    console::error_2(&JsValue::from_str("Failed exporting QR code:"), &err);
                }
                return false;
            }
        }
        true
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn rendered(&mut self, _first_render: bool) {
        self.paint_code();
    }

    fn view(&self) -> Html {
        html! {
            <div class="qr-form">
                <header>
                    <h1>{ "🔲 Create a QR Code" }</h1>
                </header>
                { self.view_type_selector() }
                <div class="inputs">
                    { for self.state.content_type.descriptor().fields.iter().map(|input| self.view_input(input)) }
                </div>
                <div class="colors">
                    <label>
                        { "QR code colour" }
                        <input
                            type="color"
                            value=self.state.color.as_str().to_owned()
                            oninput=self.link.callback(|e: InputData| Msg::SetColor(e.value))
                        />
                    </label>
                    { for Color::presets().map(|preset| self.view_swatch(preset)) }
                </div>
                <button type="button" class="generate" onclick=self.link.callback(|_| Msg::Generate)>
                    { "✨ Generate QR Code" }
                </button>
                { self.view_code() }
            </div>
        }
    }
}
