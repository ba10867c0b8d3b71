//! Main application UI and state management.
//! Handles grade/week browsing, the full-screen teaching mode, and the quiz.

use eframe::egui;
use log::info;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use wordweek_app::audio::{AudioPlayer, PlaybackEvent};
use wordweek_app::data::load_grade_document;
use wordweek_app::models::quiz;
use wordweek_app::{CardView, GradeDocument, QuizQuestion, TeachingSession};

/// Grades offered in the selector. Whether a grade's document actually
/// exists is only found out when it is loaded.
const GRADES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Browse,
    Teaching,
    Quiz,
}

/// One quiz round: the question plus the locked-in answer, if any.
struct QuizRound {
    question: QuizQuestion,
    chosen: Option<usize>,
}

/// Main application state
pub struct WordweekApp {
    data_root: PathBuf,
    selected_grade: Option<String>,
    selected_week: Option<String>,
    document: Option<GradeDocument>,
    cards: Vec<CardView>,
    status_message: String,

    player: AudioPlayer,
    current_screen: AppScreen,
    teaching: Option<TeachingSession>,
    quiz_round: Option<QuizRound>,
}

impl eframe::App for WordweekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drive_playback(ctx, now);

        match self.current_screen {
            AppScreen::Browse => self.render_browse_screen(ctx, now),
            AppScreen::Teaching => self.render_teaching_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }
    }
}

impl WordweekApp {
    /// Creates the application pointed at a word-data directory (holding
    /// `document/` and `Audio/`).
    pub fn new(data_root: PathBuf) -> Self {
        Self {
            data_root,
            selected_grade: None,
            selected_week: None,
            document: None,
            cards: Vec::new(),
            status_message: "Pick a grade to begin.".to_string(),
            player: AudioPlayer::new(),
            current_screen: AppScreen::Browse,
            teaching: None,
            quiz_round: None,
        }
    }

    fn audio_root(&self) -> PathBuf {
        self.data_root.join("Audio")
    }

    /// Per-frame playback bookkeeping: observe clip completions, hand them
    /// to a running teaching session, and start whatever clip fell due.
    fn drive_playback(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(PlaybackEvent::Finished) = self.player.poll(now) {
            if let Some(session) = &mut self.teaching {
                session.clip_finished(now);
            }
        }

        let due_clip = self
            .teaching
            .as_mut()
            .and_then(|session| session.next_due(now).map(|card| card.audio_path.clone()));
        if let Some(clip) = due_clip {
            self.player.play(&self.data_root.join("Audio"), &clip, now);
        }

        // Deadlines only get observed if frames keep coming.
        if self.teaching.is_some() || !self.player.is_idle() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    /// Renders the browse screen: selectors, status line, and the card list
    fn render_browse_screen(&mut self, ctx: &egui::Context, now: Instant) {
        // We store actions to execute after UI rendering to avoid borrowing conflicts
        let mut action_play: Option<String> = None;
        let mut action_teach = false;
        let mut action_quiz = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Weekly Vocabulary");

            ui.horizontal(|ui| {
                ui.label(format!("Word data: {}", self.data_root.display()));
                if ui.button("Change folder").clicked() {
                    if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                        self.set_data_root(folder);
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let previous_grade = self.selected_grade.clone();
                egui::ComboBox::from_label("Grade")
                    .selected_text(match &self.selected_grade {
                        Some(grade) => format!("Grade {grade}"),
                        None => "--".to_string(),
                    })
                    .show_ui(ui, |ui| {
                        for grade in GRADES {
                            ui.selectable_value(
                                &mut self.selected_grade,
                                Some(grade.to_string()),
                                format!("Grade {grade}"),
                            );
                        }
                    });
                if self.selected_grade != previous_grade {
                    self.handle_grade_change();
                }

                let previous_week = self.selected_week.clone();
                ui.add_enabled_ui(self.document.is_some(), |ui| {
                    egui::ComboBox::from_label("Week")
                        .selected_text(match &self.selected_week {
                            Some(week) => format!("Week {week}"),
                            None => "--".to_string(),
                        })
                        .show_ui(ui, |ui| {
                            let week_numbers = self
                                .document
                                .as_ref()
                                .map(|doc| doc.week_numbers())
                                .unwrap_or_default();
                            for week in week_numbers {
                                ui.selectable_value(
                                    &mut self.selected_week,
                                    Some(week.to_string()),
                                    format!("Week {week}"),
                                );
                            }
                        });
                });
                if self.selected_week != previous_week {
                    self.show_words_for_week();
                }
            });

            if !self.status_message.is_empty() {
                ui.add_space(6.0);
                ui.label(&self.status_message);
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.cards.is_empty(), egui::Button::new("Teaching mode"))
                    .clicked()
                {
                    action_teach = true;
                }
                if ui
                    .add_enabled(!self.cards.is_empty(), egui::Button::new("Quiz"))
                    .clicked()
                {
                    action_quiz = true;
                }
            });

            ui.separator();

            let busy = self.player.is_busy();
            egui::ScrollArea::vertical()
                .id_salt("word_cards")
                .show(ui, |ui| {
                    for card in &self.cards {
                        ui.group(|ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.heading(&card.word.word);
                                    if let Some(phonetic) = &card.word.phonetic {
                                        ui.label(phonetic);
                                    }
                                    ui.label(format!(
                                        "{} {}",
                                        card.word.pos.as_deref().unwrap_or(""),
                                        card.word.chinese.as_deref().unwrap_or("")
                                    ));
                                    if let Some(sentence) = &card.word.sentence {
                                        ui.label(sentence);
                                    }
                                });
                                if ui.add_enabled(!busy, egui::Button::new("▶")).clicked() {
                                    action_play = Some(card.audio_path.clone());
                                }
                            });
                        });
                    }
                });
        });

        // Execute deferred actions
        if let Some(clip) = action_play {
            let audio_root = self.audio_root();
            self.player.play(&audio_root, &clip, now);
        }
        if action_teach {
            self.start_teaching(ctx, now);
        }
        if action_quiz {
            self.start_quiz();
        }
    }

    /// Renders the full-screen teaching view over the running session
    fn render_teaching_screen(&mut self, ctx: &egui::Context) {
        let mut action_exit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(session) = &self.teaching {
                let card = session.current_card();
                let word = card.word.clone();
                let position = session.current_index() + 1;
                let total = session.card_count();
                let width = ui.available_width();

                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(format!("{position} / {total}"));
                    ui.add_space(40.0);

                    let size = fit_font_size(&word.word, width * 0.8);
                    ui.label(egui::RichText::new(&word.word).size(size).strong());

                    if let Some(phonetic) = &word.phonetic {
                        ui.label(egui::RichText::new(phonetic).size(28.0));
                    }
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            word.pos.as_deref().unwrap_or(""),
                            word.chinese.as_deref().unwrap_or("")
                        ))
                        .size(32.0),
                    );
                    if let Some(sentence) = &word.sentence {
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(sentence).size(24.0).italics());
                    }

                    ui.add_space(40.0);
                    if ui.button("Exit teaching mode").clicked() {
                        action_exit = true;
                    }
                    ui.label(egui::RichText::new("Esc also exits").weak());
                });
            }
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action_exit = true;
        }
        if action_exit {
            self.stop_teaching(ctx);
        }
    }

    /// Renders the quiz screen: prompt, four options, and the result
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        let mut action_choose: Option<usize> = None;
        let mut action_next = false;
        let mut action_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(round) = &self.quiz_round {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label("Which word means:");
                    ui.heading(egui::RichText::new(&round.question.prompt).size(40.0));
                    ui.add_space(30.0);

                    for (i, option) in round.question.options.iter().enumerate() {
                        let response = match round.chosen {
                            // Open round: plain, clickable options.
                            None => ui.add_sized([260.0, 36.0], egui::Button::new(option)),
                            // Locked round: color the verdict, reveal the answer.
                            Some(chosen) => {
                                let is_correct = round.question.correct_index == i;
                                let text = if is_correct {
                                    egui::RichText::new(format!("✓ {option}"))
                                        .color(egui::Color32::DARK_GREEN)
                                } else if chosen == i {
                                    egui::RichText::new(format!("✗ {option}"))
                                        .color(egui::Color32::RED)
                                } else {
                                    egui::RichText::new(option)
                                };
                                ui.add_enabled(false, egui::Button::new(text).min_size([260.0, 36.0].into()))
                            }
                        };
                        if response.clicked() && round.chosen.is_none() {
                            action_choose = Some(i);
                        }
                        ui.add_space(8.0);
                    }

                    if let Some(chosen) = round.chosen {
                        ui.add_space(12.0);
                        if round.question.is_correct(chosen) {
                            ui.label(egui::RichText::new("Correct!").color(egui::Color32::DARK_GREEN));
                        } else {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Wrong. The answer is {}",
                                    round.question.correct_word()
                                ))
                                .color(egui::Color32::RED),
                            );
                        }
                    }

                    ui.add_space(20.0);
                    ui.horizontal(|ui| {
                        if ui.button("New question").clicked() {
                            action_next = true;
                        }
                        if ui.button("Back").clicked() {
                            action_back = true;
                        }
                    });
                });
            }
        });

        if let Some(i) = action_choose {
            if let Some(round) = &mut self.quiz_round {
                round.chosen = Some(i);
            }
        }
        if action_next {
            self.start_quiz();
        }
        if action_back {
            self.quiz_round = None;
            self.current_screen = AppScreen::Browse;
        }
    }

    /// Points the app at a different word-data directory and resets all
    /// selections.
    fn set_data_root(&mut self, folder: PathBuf) {
        info!("word data root changed to {}", folder.display());
        self.data_root = folder;
        self.selected_grade = None;
        self.selected_week = None;
        self.document = None;
        self.cards.clear();
        self.status_message = "Pick a grade to begin.".to_string();
    }

    /// Loads the newly selected grade's document. The week selector stays
    /// disabled until a document is in place.
    fn handle_grade_change(&mut self) {
        self.document = None;
        self.selected_week = None;
        self.cards.clear();

        let Some(grade) = self.selected_grade.clone() else {
            self.status_message = "Pick a grade to begin.".to_string();
            return;
        };

        match load_grade_document(&self.data_root, &grade) {
            Ok(document) => {
                info!("loaded grade {grade}: {} weeks", document.weeks.len());
                self.status_message = "Pick a week to show its words.".to_string();
                self.document = Some(document);
            }
            Err(e) => {
                log::error!("{e}");
                self.status_message = e.to_string();
            }
        }
    }

    /// Rebuilds the card list for the selected week.
    fn show_words_for_week(&mut self) {
        self.cards.clear();

        let (Some(document), Some(grade), Some(week)) = (
            self.document.as_ref(),
            self.selected_grade.as_deref(),
            self.selected_week.as_deref(),
        ) else {
            return;
        };

        match document.find_week(week) {
            Some(entry) if !entry.content.is_empty() => {
                self.cards = entry
                    .content
                    .iter()
                    .map(|word| CardView::new(word, grade, entry.week))
                    .collect();
                self.status_message.clear();
            }
            _ => {
                self.status_message = "No words found for this combination.".to_string();
            }
        }
    }

    /// Enters teaching mode over a snapshot of the current cards and starts
    /// the first clip.
    fn start_teaching(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(session) = TeachingSession::enter(&self.cards) {
            let clip = session.current_card().audio_path.clone();
            self.teaching = Some(session);
            self.current_screen = AppScreen::Teaching;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            let audio_root = self.audio_root();
            self.player.play(&audio_root, &clip, now);
        }
    }

    /// Leaves teaching mode. A clip that is already playing runs out on its
    /// own; no further card is started.
    fn stop_teaching(&mut self, ctx: &egui::Context) {
        if let Some(session) = &mut self.teaching {
            session.exit();
        }
        self.teaching = None;
        self.current_screen = AppScreen::Browse;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
    }

    /// Draws a fresh question for the active week, or reports why it can't.
    fn start_quiz(&mut self) {
        let words: Vec<_> = self.cards.iter().map(|card| card.word.clone()).collect();
        match quiz::generate(&words, &mut rand::rng()) {
            Ok(question) => {
                self.quiz_round = Some(QuizRound {
                    question,
                    chosen: None,
                });
                self.current_screen = AppScreen::Quiz;
            }
            Err(e) => {
                self.status_message = e.to_string();
                self.quiz_round = None;
                self.current_screen = AppScreen::Browse;
            }
        }
    }
}

/// Shrinks the headline font until the word fits the available width.
/// Glyph width is estimated; vocabulary entries are short Latin words, so
/// rough is fine.
fn fit_font_size(text: &str, max_width: f32) -> f32 {
    let mut size = 96.0;
    while size > 24.0 && text.chars().count() as f32 * size * 0.6 > max_width {
        size -= 4.0;
    }
    size
}

/// egui's bundled fonts have no CJK coverage, so pull in a system font for
/// the Chinese glosses. Missing fonts are logged, not fatal.
pub fn install_cjk_fonts(ctx: &egui::Context) {
    const CANDIDATES: [&str; 6] = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/arphic/uming.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "C:\\Windows\\Fonts\\msjh.ttc",
        "C:\\Windows\\Fonts\\simhei.ttf",
    ];

    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            info!("using CJK font {path}");
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert("cjk".to_string(), egui::FontData::from_owned(bytes));
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("cjk".to_string());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("cjk".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
    log::warn!("no CJK font found; Chinese text may not render");
}
