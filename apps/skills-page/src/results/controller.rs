use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::PageError;
use crate::results::reveal::{RevealCursor, RevealState};
use crate::results::selection::{collect_selected_rows, SelectedRecord};
use crate::results::submit::{
    submit_selection, HttpPrepEmail, LinkOpener, PrepEmailTransport, SystemBrowser,
};
use crate::results::view::TableView;

/// Page-scoped controller for the results table.
pub struct ResultTableController<V: TableView> {
    view: V,
    cursor: RevealCursor,
    transport: Arc<dyn PrepEmailTransport>,
    opener: Arc<dyn LinkOpener>,
}

impl<V: TableView> ResultTableController<V> {
    /// Takes over the table with every body row hidden and nothing revealed yet.
    pub fn attach(
        mut view: V,
        increment: usize,
        transport: Arc<dyn PrepEmailTransport>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        let total = view.body_rows().len();
        for index in 0..total {
            view.set_row_visible(index, false);
        }
        Self {
            view,
            cursor: RevealCursor::new(total, increment),
            transport,
            opener,
        }
    }

    /// Page-ready initialisation: attach, then reveal the first page of rows.
    pub fn ready(
        view: V,
        increment: usize,
        transport: Arc<dyn PrepEmailTransport>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        let mut controller = Self::attach(view, increment, transport, opener);
        controller.show_more_rows();
        controller
    }

    /// Page-ready initialisation with the HTTP transport and the system browser.
    pub fn from_config(view: V, config: &Config) -> Result<Self, PageError> {
        let transport = HttpPrepEmail::from_config(config)?;
        Ok(Self::ready(
            view,
            config.reveal_increment,
            Arc::new(transport),
            Arc::new(SystemBrowser),
        ))
    }

    /// Click on `#show_more`.
    pub fn show_more_rows(&mut self) -> RevealState {
        let revealed = self.cursor.advance();
        debug!(
            "Revealing rows {}..{} of {}",
            revealed.start,
            revealed.end,
            self.cursor.total()
        );
        for index in revealed {
            self.view.set_row_visible(index, true);
        }

        let state = self.cursor.state();
        if state == RevealState::Complete {
            self.view.hide_show_more();
        }
        state
    }

    pub fn selected_rows(&self) -> Vec<SelectedRecord> {
        collect_selected_rows(&self.view.body_rows())
    }

    /// Click on `#retrieve_selected`: sends the checked rows and opens the returned link.
    /// Failures are logged and yield `None`.
    pub async fn retrieve_selected(&self) -> Option<String> {
        let records = self.selected_rows();
        match submit_selection(self.transport.as_ref(), self.opener.as_ref(), &records).await {
            Ok(url) => {
                info!("Selected rows sent to the server ({} records)", records.len());
                Some(url)
            }
            Err(e) => {
                error!("Error sending selected rows to the server: {e}");
                None
            }
        }
    }

    pub fn state(&self) -> RevealState {
        self.cursor.state()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
