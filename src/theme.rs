/// Widget stylesheet, injected once by `ui::App`.
pub const WIDGET_CSS: &str = r#"
:root {
    --color-bg-primary: #1a1a1a;
    --color-bg-secondary: #242424;
    --color-text-primary: #f5f5f5;
    --color-text-muted: #a0a0a0;
    --color-accent: #ff3509;
    --color-border: #333333;
    --color-chat-user-bg: #ff3509;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #2e2e2e;
    --color-chat-assistant-text: #f5f5f5;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-container { height: 100dvh; display: flex; flex-direction: column; max-width: 720px; margin: 0 auto; }
.chat-header { display: flex; align-items: center; gap: 12px; padding: 14px 16px; background: var(--color-bg-secondary); border-bottom: 1px solid var(--color-border); }
.header-avatar { font-size: 28px; }
.header-info h1 { font-size: 17px; font-weight: 600; }
.header-info p { font-size: 12px; color: var(--color-text-muted); }
.messages { flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px; }
.message { display: flex; gap: 8px; align-items: flex-end; max-width: 85%; }
.message.user { align-self: flex-end; flex-direction: row-reverse; }
.message.assistant { align-self: flex-start; }
.message-avatar { font-size: 22px; flex-shrink: 0; }
.message-bubble { padding: 10px 14px; border-radius: 16px; font-size: 15px; line-height: 1.45; word-wrap: break-word; }
.message.user .message-bubble { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); border-bottom-right-radius: 4px; }
.message.assistant .message-bubble { background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); border-bottom-left-radius: 4px; }
.typing-indicator { display: flex; gap: 4px; padding: 4px 0; }
.typing-indicator span { width: 7px; height: 7px; border-radius: 50%; background: var(--color-text-muted); animation: typing 1.2s infinite; }
.typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
.typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
@keyframes typing { 0%, 60%, 100% { opacity: 0.3; transform: translateY(0); } 30% { opacity: 1; transform: translateY(-4px); } }
.input-form { display: flex; gap: 8px; padding: 12px 16px; background: var(--color-bg-secondary); border-top: 1px solid var(--color-border); }
.input-form textarea { flex: 1; resize: none; padding: 10px 14px; border-radius: 20px; border: 1px solid var(--color-border); background: var(--color-bg-primary); color: var(--color-text-primary); font: inherit; font-size: 15px; max-height: 120px; outline: none; }
.input-form textarea:focus { border-color: var(--color-accent); }
.send-button { width: 44px; height: 44px; border-radius: 50%; border: none; background: var(--color-accent); color: #ffffff; display: flex; align-items: center; justify-content: center; cursor: pointer; }
.send-button svg { width: 20px; height: 20px; }
.send-button:disabled, .input-form textarea:disabled { opacity: 0.5; cursor: not-allowed; }
.loading-overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.6); }
.loading-overlay[hidden] { display: none; }
.loading-spinner { width: 40px; height: 40px; border: 4px solid rgba(255, 255, 255, 0.2); border-top-color: var(--color-accent); border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
