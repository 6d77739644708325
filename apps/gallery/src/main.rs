//! Visual gallery for the Mosaic design system.
//!
//! Renders the full token palette, the decorative avatar spread, the send
//! button states, and the bundled icon set, with a live light/dark toggle
//! and optional branding overrides loaded from disk.

use std::path::PathBuf;
use std::str::FromStr;

use branding::ConfigStore;
use clap::Parser;
use components::{Avatar, IconSize, SendButton, TokenIcon};
use designsystem::{
    gradients, install_defaults, to_hex, ColorToken, IconName, SharedTheme, ThemeMode,
};
use gpui::{
    div, linear_color_stop, linear_gradient, prelude::*, px, size, Application, Bounds, Context,
    MouseDownEvent, SharedString, Window, WindowBounds, WindowOptions,
};
use gpui_component::{
    button::Button,
    group_box::GroupBox,
    styled::{h_flex, v_flex},
    text::Text,
    ActiveTheme as _,
};
use tracing::warn;

#[derive(Parser)]
#[command(name = "gallery", about = "Mosaic design system gallery")]
struct GalleryCli {
    /// Initial theme mode.
    #[arg(long, default_value = "light", value_parser = ThemeMode::from_str)]
    mode: ThemeMode,
    /// Branding file to load instead of the platform default location.
    #[arg(long)]
    branding: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = GalleryCli::parse();

    let theme = SharedTheme::new(cli.mode);
    let store = match cli.branding {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::default(),
    };
    match store.load() {
        Ok(config) => {
            branding::apply(&config, &theme);
        }
        Err(error) => {
            warn!(path = %store.path().display(), %error, "branding file unreadable, using defaults");
        }
    }

    let app = install_defaults(Application::new());
    app.run(move |cx| {
        gpui_component::init(cx);
        theme.apply(cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    size(px(960.0), px(720.0)),
                    cx,
                ))),
                titlebar: Some("Mosaic Design Gallery".into()),
                ..Default::default()
            },
            move |window, cx| {
                window.set_title("Mosaic Design Gallery");
                cx.new(|_| GalleryApp::new(theme.clone()))
            },
        )
        .expect("gallery window");
        cx.activate(true);
    });
}

const SAMPLE_IDENTITIES: &[(&str, &str)] = &[
    ("@alice:mosaic.chat", "Alice"),
    ("@bob:mosaic.chat", "Bob"),
    ("@charlie:mosaic.chat", "Charlie"),
    ("!design-crit:mosaic.chat", "Design Crit"),
    ("@émile:mosaic.chat", "Émile"),
    ("@dana:mosaic.chat", "Dana"),
];

struct GalleryApp {
    theme: SharedTheme,
    sent_count: usize,
}

impl GalleryApp {
    fn new(theme: SharedTheme) -> Self {
        Self {
            theme,
            sent_count: 0,
        }
    }

    fn toggle_mode(&mut self, cx: &mut Context<Self>) {
        let next = match self.theme.mode() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.theme.set_mode(next);
        self.theme.apply(cx);
        cx.notify();
    }

    fn render_header(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let mode_label = match self.theme.mode() {
            ThemeMode::Light => "Switch to dark",
            ThemeMode::Dark => "Switch to light",
        };

        h_flex()
            .justify_between()
            .items_center()
            .child(
                v_flex()
                    .gap_1()
                    .child(Text::new("Mosaic Design Gallery").size(20.0))
                    .child(
                        Text::new("Semantic tokens, decorative identities, and composer controls.")
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(
                Button::new("mode-toggle")
                    .label(mode_label)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle_mode(cx);
                        window.refresh();
                    })),
            )
    }

    fn render_composer(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let sent = SharedString::from(format!("Messages sent: {}", self.sent_count));

        GroupBox::new().title(Text::new("Composer")).child(
            h_flex()
                .gap_4()
                .items_center()
                .child(SendButton::new("send-enabled", self.theme.clone()).on_click(
                    cx.listener(|this, _: &MouseDownEvent, _window, cx| {
                        this.sent_count += 1;
                        cx.notify();
                    }),
                ))
                .child(SendButton::new("send-disabled", self.theme.clone()).disabled(true))
                .child(Text::new(sent).text_color(cx.theme().muted_foreground)),
        )
    }

    fn render_identities(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        GroupBox::new().title(Text::new("Decorative identities")).child(
            h_flex()
                .gap_3()
                .flex_wrap()
                .children(SAMPLE_IDENTITIES.iter().map(|(content_id, name)| {
                    v_flex()
                        .items_center()
                        .gap_1()
                        .child(Avatar::new(self.theme.clone(), *content_id, *name).size(40.0))
                        .child(
                            Text::new(*name)
                                .size(12.0)
                                .text_color(cx.theme().muted_foreground),
                        )
                })),
        )
    }

    fn render_icons(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        GroupBox::new().title(Text::new("Icon set")).child(
            h_flex()
                .gap_3()
                .flex_wrap()
                .children(IconName::ALL.iter().map(|name| {
                    v_flex()
                        .items_center()
                        .gap_1()
                        .w(px(88.0))
                        .child(
                            div()
                                .rounded(cx.theme().radius)
                                .p_3()
                                .bg(cx.theme().muted)
                                .child(
                                    TokenIcon::new(*name, self.theme.clone())
                                        .size(IconSize::Large),
                                ),
                        )
                        .child(
                            Text::new(name.stem())
                                .size(12.0)
                                .text_color(cx.theme().muted_foreground),
                        )
                })),
        )
    }

    fn render_gradients(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let super_stops = gradients::super_button_stops();
        let send_stops = gradients::send_button_stops();

        GroupBox::new().title(Text::new("Gradients")).child(
            v_flex()
                .gap_3()
                .child(
                    div()
                        .h(px(44.0))
                        .w(px(280.0))
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(linear_gradient(
                            180.0,
                            linear_color_stop(super_stops[0].color, super_stops[0].position),
                            linear_color_stop(super_stops[1].color, super_stops[1].position),
                        ))
                        .child(
                            Text::new("Super button")
                                .text_color(self.theme.resolve(ColorToken::TextOnSolidPrimary)),
                        ),
                )
                .child(
                    h_flex()
                        .gap_2()
                        .children(send_stops.iter().map(|stop| {
                            v_flex()
                                .gap_1()
                                .items_center()
                                .child(
                                    div()
                                        .size(px(40.0))
                                        .rounded(cx.theme().radius)
                                        .bg(stop.color),
                                )
                                .child(
                                    Text::new(format!("{:.1}", stop.position))
                                        .size(12.0)
                                        .text_color(cx.theme().muted_foreground),
                                )
                        })),
                ),
        )
    }

    fn render_palette(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let mode = self.theme.mode();

        GroupBox::new()
            .title(Text::new(format!("{} palette", mode.as_str())))
            .child(
                h_flex()
                    .gap_3()
                    .flex_wrap()
                    .children(ColorToken::all().map(|token| {
                        let color = self.theme.resolve(token);
                        v_flex()
                            .gap_1()
                            .w(px(132.0))
                            .child(
                                div()
                                    .rounded(cx.theme().radius)
                                    .h(px(40.0))
                                    .bg(color)
                                    .shadow_md(),
                            )
                            .child(Text::new(token.slug()).size(12.0))
                            .child(
                                Text::new(to_hex(color))
                                    .size(12.0)
                                    .text_color(cx.theme().muted_foreground),
                            )
                    })),
            )
    }
}

impl gpui::Render for GalleryApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .gap_6()
            .p_6()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(self.render_composer(cx))
            .child(self.render_identities(cx))
            .child(self.render_icons(cx))
            .child(self.render_gradients(cx))
            .child(self.render_palette(cx))
    }
}
