/// Timeout applied to every outbound provider call.
pub const PROVIDER_TIMEOUT_SECS: u64 = 15;

/// Provider path for document sends, appended to the base URL.
pub const PROVIDER_DOCUMENT_ENDPOINT: &str = "/api/enviar-documento";

/// How often the duplicate filter drops expired entries.
pub const DEDUPE_SWEEP_INTERVAL_MS: u64 = 30 * 60 * 1000;

/// Welcome message sent to every new contact. `{name}` is replaced with
/// the contact's first name.
pub const WELCOME_TEMPLATE: &str = "Olá! 👋
Graça e Paz {name} 🕊️

Acompanhe todo nosso trabalho pelo 💛 CANAL WHATSAPP
👉👉 - Clique aqui https://pregadormanasses.com/canal

⚠️🚨muito importante🚨⚠️
➡️ Salva o meu Contato ✉️

➡️ Baixe nosso guia de Pregação Passo a Passo

Link na Bio do Canal

att,,
Pregador Manasses
Levando Avivamento🔥 Trazendo Almas a Cristo ✝️";

/// Contact card forwarded after the welcome message, base64-encoded at
/// send time.
pub const CONTACT_VCARD: &str = "BEGIN:VCARD
VERSION:3.0
FN:Pregador Manassés
ORG:Clube de Pregadores
TEL;TYPE=CELL:+5511956005068
URL:https://clubedepregadores.com.br
END:VCARD";

/// Filename the provider shows for the contact-card attachment.
pub const CONTACT_CARD_FILENAME: &str = "Pregador-Manasses.vcf";
