use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use crate::events::ViewKey;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window. When
    /// `config.data_directory` is set, the directory is created and the
    /// WebView gets its own `WebContext` rooted there, isolating cookies and
    /// storage from every other WebView.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        key: ViewKey,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut context = match &config.data_directory {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                Some(WebContext::new(Some(dir.clone())))
            }
            None => None,
        };

        let mut builder = match context.as_mut() {
            Some(ctx) => WebViewBuilder::with_web_context(ctx),
            None => WebViewBuilder::new(),
        };

        builder = builder
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(false);

        if config.ipc_bridge {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), key);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), key);
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), key);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.events),
            key,
            config.navigation,
        );

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(
            view = %key,
            url = %initial_url,
            partitioned = context.is_some(),
            "WebView created"
        );

        Ok(WebViewHandle {
            webview,
            _context: context,
            key,
        })
    }
}
