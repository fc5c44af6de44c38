use crate::app::RosterStore;
use crate::model::SortKey;
use crate::persistence::ProgressFile;

use gtk4::gdk::Display;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, ButtonsType, CssProvider, Grid,
    Label, MessageDialog, MessageType, Orientation, PolicyType, ScrolledWindow, SearchEntry,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const WINDOW_TITLE: &str = "Hades 2 Nectar Tracker";

pub fn build_ui(app: &Application, store: Rc<RefCell<RosterStore>>, progress: Rc<ProgressFile>) {
    // Re-activation just raises the existing window
    if let Some(window) = app.active_window() {
        window.present();
        return;
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(520)
        .default_height(720)
        .build();

    let provider = CssProvider::new();
    provider.load_from_data(
        r#"
        .column-header {
            font-weight: bold;
        }
        .count-label {
            font-family: monospace;
            font-size: 14px;
        }
        .adjust-button {
            min-width: 40px;
            min-height: 32px;
        }
        .status-label {
            font-size: 12px;
            opacity: 0.8;
        }
        "#,
    );
    match Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => tracing::warn!("no display available, skipping custom styling"),
    }

    let main_box = GtkBox::new(Orientation::Vertical, 0);

    // Search + save controls
    let header = GtkBox::new(Orientation::Horizontal, 8);
    header.set_margin_start(12);
    header.set_margin_end(12);
    header.set_margin_top(8);
    header.set_margin_bottom(8);

    let search_entry = SearchEntry::new();
    search_entry.set_placeholder_text(Some("Filter characters..."));
    search_entry.set_hexpand(true);

    let save_btn = Button::with_label("Save Progress");

    header.append(&search_entry);
    header.append(&save_btn);

    // Clickable column headers
    let columns = Grid::new();
    columns.set_column_homogeneous(false);
    columns.set_margin_start(12);
    columns.set_margin_end(12);

    let name_header = Button::with_label(SortKey::Name.label());
    name_header.add_css_class("flat");
    name_header.add_css_class("column-header");
    name_header.set_hexpand(true);
    name_header.set_halign(Align::Start);

    let count_header = Button::with_label(SortKey::Count.label());
    count_header.add_css_class("flat");
    count_header.add_css_class("column-header");

    columns.attach(&name_header, 0, 0, 1, 1);
    columns.attach(&count_header, 1, 0, 1, 1);

    let list_box = GtkBox::new(Orientation::Vertical, 0);
    let scroller = ScrolledWindow::builder()
        .hscrollbar_policy(PolicyType::Never)
        .vexpand(true)
        .child(&list_box)
        .build();

    let status_label = Label::new(None);
    status_label.add_css_class("status-label");
    status_label.set_halign(Align::Start);
    status_label.set_margin_start(12);
    status_label.set_margin_top(4);
    status_label.set_margin_bottom(8);

    main_box.append(&header);
    main_box.append(&columns);
    main_box.append(&scroller);
    main_box.append(&status_label);
    window.set_child(Some(&main_box));

    update_headers(&name_header, &count_header, &store.borrow());
    render_list(&list_box, &status_label, &store);

    // Filter
    let store_search = store.clone();
    let list_box_search = list_box.clone();
    let status_label_search = status_label.clone();
    search_entry.connect_search_changed(move |entry| {
        store_search.borrow_mut().set_filter(&entry.text());
        render_list(&list_box_search, &status_label_search, &store_search);
    });

    // Sorting
    for (button, key) in [(&name_header, SortKey::Name), (&count_header, SortKey::Count)] {
        let store_sort = store.clone();
        let list_box_sort = list_box.clone();
        let status_label_sort = status_label.clone();
        let name_header_sort = name_header.clone();
        let count_header_sort = count_header.clone();
        button.connect_clicked(move |_| {
            store_sort.borrow_mut().set_sort_key(key);
            update_headers(&name_header_sort, &count_header_sort, &store_sort.borrow());
            render_list(&list_box_sort, &status_label_sort, &store_sort);
        });
    }

    // Explicit save
    let store_save = store.clone();
    let window_save = window.clone();
    save_btn.connect_clicked(move |_| {
        let result = progress.save(store_save.borrow().roster());
        match result {
            Ok(()) => show_message(&window_save, MessageType::Info, "Progress saved!"),
            Err(e) => {
                tracing::error!("failed to save progress: {}", e);
                show_message(
                    &window_save,
                    MessageType::Error,
                    &format!("Could not save progress:\n\n{}", e),
                );
            }
        }
    });

    window.present();
}

/// Show the sort marker on whichever column is active
fn update_headers(name_header: &Button, count_header: &Button, store: &RosterStore) {
    let active = store.sort_key();
    let arrow = store.sort_direction().arrow();
    for (button, key) in [(name_header, SortKey::Name), (count_header, SortKey::Count)] {
        if key == active {
            button.set_label(&format!("{} {}", key.label(), arrow));
        } else {
            button.set_label(key.label());
        }
    }
}

/// Rebuild the rows from the store's current view
fn render_list(container: &GtkBox, status_label: &Label, store: &Rc<RefCell<RosterStore>>) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }

    let (view, total) = {
        let s = store.borrow();
        (s.view(), s.roster().len())
    };

    for entry in &view {
        let row = Grid::new();
        row.set_column_spacing(8);
        row.set_margin_start(12);
        row.set_margin_end(12);
        row.set_margin_top(4);
        row.set_margin_bottom(4);

        let name_label = Label::new(Some(entry.name.as_str()));
        name_label.set_hexpand(true);
        name_label.set_halign(Align::Start);

        let count_label = Label::new(Some(entry.count.to_string().as_str()));
        count_label.add_css_class("count-label");
        count_label.set_width_chars(4);

        let decrease_btn = adjust_button("-", "Decrease Nectar Count");
        let increase_btn = adjust_button("+", "Increase Nectar Count");

        for (button, delta) in [(&decrease_btn, -1), (&increase_btn, 1)] {
            let store = store.clone();
            let count_label = count_label.clone();
            let name = entry.name.clone();
            button.connect_clicked(move |_| {
                // Only the label changes; the list is re-sorted on the next header click
                if let Some(count) = store.borrow_mut().adjust(&name, delta) {
                    count_label.set_text(&count.to_string());
                }
            });
        }

        row.attach(&name_label, 0, 0, 1, 1);
        row.attach(&count_label, 1, 0, 1, 1);
        row.attach(&decrease_btn, 2, 0, 1, 1);
        row.attach(&increase_btn, 3, 0, 1, 1);
        container.append(&row);
    }

    status_label.set_text(&format!("Showing {} of {} characters", view.len(), total));
}

fn adjust_button(label: &str, tooltip: &str) -> Button {
    let button = Button::with_label(label);
    button.add_css_class("adjust-button");
    button.set_tooltip_text(Some(tooltip));
    button.set_valign(Align::Center);
    button
}

fn show_message(window: &ApplicationWindow, kind: MessageType, message: &str) {
    let dialog = MessageDialog::new(
        Some(window),
        gtk4::DialogFlags::MODAL | gtk4::DialogFlags::DESTROY_WITH_PARENT,
        kind,
        ButtonsType::Ok,
        message,
    );
    dialog.set_title(Some(WINDOW_TITLE));
    dialog.connect_response(|dialog, _| {
        dialog.close();
    });
    dialog.show();
}
