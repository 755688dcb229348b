// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Embedded NEONPAY site catalog.
//!
//! Six pages per language. Page order matters: ranking ties keep this order.

use super::SearchIndex;
use crate::types::{Category, CategoryLabels, Document, LanguageCatalog};

pub(super) fn index() -> SearchIndex {
    SearchIndex::new([
        ("en".to_string(), english()),
        ("ru".to_string(), russian()),
        ("az".to_string(), azerbaijani()),
    ])
}

fn page(
    title: &str,
    url: &str,
    category: Category,
    keywords: &[&str],
    content: &str,
    description: &str,
) -> Document {
    Document {
        title: title.to_string(),
        url: url.to_string(),
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        content: content.to_string(),
        description: description.to_string(),
    }
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn labels(main: &str, docs: &str, examples: &str, info: &str) -> CategoryLabels {
    CategoryLabels::from([
        (Category::Main, main.to_string()),
        (Category::Docs, docs.to_string()),
        (Category::Examples, examples.to_string()),
        (Category::Info, info.to_string()),
    ])
}

fn english() -> LanguageCatalog {
    LanguageCatalog {
        documents: vec![
            page(
                "NEONPAY API - Home",
                "index.html",
                Category::Main,
                &["neonpay", "api", "telegram", "stars", "payment", "bot", "python", "integration"],
                "Simple and elegant Telegram Stars payment integration for Python bots. Add payments to your bot with just 2-3 lines of code. Easy Integration Multi-Library Support Telegram Stars Secure",
                "Main page with overview of NEONPAY features and quick example",
            ),
            page(
                "About NEONPAY",
                "about.html",
                Category::Info,
                &["about", "mission", "team", "history", "abbas sultanov", "goals"],
                "About NEONPAY Simplifying Telegram payment integration for developers worldwide. Our mission is to make bot monetization accessible to everyone. Mission Goals Project History Team",
                "Learn about NEONPAY mission, team and project history",
            ),
            page(
                "Quick Start Guide",
                "quick-start.html",
                Category::Docs,
                &["quick start", "installation", "setup", "tutorial", "getting started", "pip install"],
                "Quick Start Guide Get started with NEONPAY in minutes. Installation tutorial setup guide pip install neonpay",
                "Step-by-step guide to get started with NEONPAY",
            ),
            page(
                "API Documentation",
                "api-docs.html",
                Category::Docs,
                &["api", "documentation", "reference", "methods", "parameters", "examples"],
                "API Documentation Complete reference for all NEONPAY methods and parameters. Methods Parameters Examples Reference",
                "Complete API reference and documentation",
            ),
            page(
                "Code Examples",
                "examples.html",
                Category::Examples,
                &["examples", "code", "samples", "aiogram", "pyrogram", "telebot", "ptb", "premium", "store", "donations"],
                "Code Examples Real-world examples Premium Bot Aiogram Digital Store Pyrogram Subscription System PTB Donation Bot Telebot Premium Features Digital Products Donations Tips",
                "Real-world code examples for all supported libraries",
            ),
            page(
                "Supported Libraries",
                "libraries.html",
                Category::Docs,
                &["libraries", "aiogram", "pyrogram", "python-telegram-bot", "ptb", "telebot", "pytelegramботapi", "support"],
                "Supported Libraries Aiogram Pyrogram python-telegram-bot PTB pyTelegramBotAPI Telebot Integration Support",
                "List of all supported Python Telegram bot libraries",
            ),
        ],
        suggestions: phrases(&[
            "How to install NEONPAY",
            "Aiogram integration",
            "Payment examples",
            "Telegram Stars",
            "Premium features",
            "Donation system",
            "Subscription model",
            "API reference",
            "Quick start guide",
            "Supported libraries",
        ]),
        categories: labels("Main Pages", "Documentation", "Code Examples", "About & Info"),
    }
}

fn russian() -> LanguageCatalog {
    LanguageCatalog {
        documents: vec![
            page(
                "NEONPAY API - Главная",
                "index.html",
                Category::Main,
                &["neonpay", "апи", "телеграм", "звезды", "платежи", "бот", "питон", "интеграция"],
                "Простая и элегантная интеграция платежей Telegram Stars для Python ботов. Добавьте платежи в ваш бот всего 2-3 строками кода. Простая интеграция Поддержка библиотек Telegram Stars Безопасный",
                "Главная страница с обзором функций NEONPAY и быстрым примером",
            ),
            page(
                "О NEONPAY",
                "about.html",
                Category::Info,
                &["о проекте", "миссия", "команда", "история", "аббас султанов", "цели"],
                "О NEONPAY Упрощаем интеграцию платежей Telegram для разработчиков по всему миру. Наша миссия - сделать монетизацию ботов доступной для всех. Миссия Цели История проекта Команда",
                "Узнайте о миссии NEONPAY, команде и истории проекта",
            ),
            page(
                "Быстрый старт",
                "quick-start.html",
                Category::Docs,
                &["быстрый старт", "установка", "настройка", "туториал", "начало работы", "pip install"],
                "Быстрый старт Начните работу с NEONPAY за несколько минут. Установка руководство настройка pip install neonpay",
                "Пошаговое руководство для начала работы с NEONPAY",
            ),
            page(
                "API Документация",
                "api-docs.html",
                Category::Docs,
                &["апи", "документация", "справочник", "методы", "параметры", "примеры"],
                "API Документация Полный справочник всех методов и параметров NEONPAY. Методы Параметры Примеры Справочник",
                "Полный справочник API и документация",
            ),
            page(
                "Примеры кода",
                "examples.html",
                Category::Examples,
                &["примеры", "код", "образцы", "aiogram", "pyrogram", "telebot", "ptb", "премиум", "магазин", "пожертвования"],
                "Примеры кода Реальные примеры Премиум бот Aiogram Цифровой магазин Pyrogram Система подписок PTB Бот пожертвований Telebot Премиум функции Цифровые продукты Пожертвования",
                "Реальные примеры кода для всех поддерживаемых библиотек",
            ),
            page(
                "Поддерживаемые библиотеки",
                "libraries.html",
                Category::Docs,
                &["библиотеки", "aiogram", "pyrogram", "python-telegram-bot", "ptb", "telebot", "pytelegramботapi", "поддержка"],
                "Поддерживаемые библиотеки Aiogram Pyrogram python-telegram-bot PTB pyTelegramBotAPI Telebot Интеграция Поддержка",
                "Список всех поддерживаемых Python Telegram bot библиотек",
            ),
        ],
        suggestions: phrases(&[
            "Как установить NEONPAY",
            "Интеграция с Aiogram",
            "Примеры платежей",
            "Telegram Stars",
            "Премиум функции",
            "Система пожертвований",
            "Модель подписки",
            "Справочник API",
            "Быстрый старт",
            "Поддерживаемые библиотеки",
        ]),
        categories: labels("Главные страницы", "Документация", "Примеры кода", "О проекте"),
    }
}

fn azerbaijani() -> LanguageCatalog {
    LanguageCatalog {
        documents: vec![
            page(
                "NEONPAY API - Ana səhifə",
                "index.html",
                Category::Main,
                &["neonpay", "api", "telegram", "ulduzlar", "ödəniş", "bot", "python", "inteqrasiya"],
                "Python botları üçün sadə və zərif Telegram Stars ödəniş inteqrasiyası. Cəmi 2-3 kod sətri ilə botunuza ödənişlər əlavə edin. Asan İnteqrasiya Çox Kitabxana Dəstəyi Telegram Stars Təhlükəsiz",
                "NEONPAY xüsusiyyətlərinə baxış və sürətli nümunə ilə ana səhifə",
            ),
            page(
                "NEONPAY haqqında",
                "about.html",
                Category::Info,
                &["haqqında", "missiya", "komanda", "tarix", "abbas sultanov", "məqsədlər"],
                "NEONPAY haqqında Dünya üzrə tərtibatçılar üçün Telegram ödəniş inteqrasiyasını sadələşdiririk. Missiyamız bot monetizasiyasını hər kəs üçün əlçatan etməkdir. Missiya Məqsədlər Layihə tarixi Komanda",
                "NEONPAY missiyası, komandası və layihə tarixi haqqında öyrənin",
            ),
            page(
                "Sürətli başlanğıc",
                "quick-start.html",
                Category::Docs,
                &["sürətli başlanğıc", "quraşdırma", "tənzimləmə", "dərslik", "başlanğıc", "pip install"],
                "Sürətli başlanğıc NEONPAY ilə dəqiqələr içində başlayın. Quraşdırma təlimat tənzimləmə pip install neonpay",
                "NEONPAY ilə işə başlamaq üçün addım-addım təlimat",
            ),
            page(
                "API Sənədləri",
                "api-docs.html",
                Category::Docs,
                &["api", "sənədlər", "arayış", "metodlar", "parametrlər", "nümunələr"],
                "API Sənədləri Bütün NEONPAY metodları və parametrləri üçün tam arayış. Metodlar Parametrlər Nümunələr Arayış",
                "Tam API arayışı və sənədləri",
            ),
            page(
                "Kod nümunələri",
                "examples.html",
                Category::Examples,
                &["nümunələr", "kod", "örnəklər", "aiogram", "pyrogram", "telebot", "ptb", "premium", "mağaza", "ianələr"],
                "Kod nümunələri Real nümunələr Premium bot Aiogram Rəqəmsal mağaza Pyrogram Abunəlik sistemi PTB İanə botu Telebot Premium xüsusiyyətlər Rəqəmsal məhsullar İanələr",
                "Bütün dəstəklənən kitabxanalar üçün real kod nümunələri",
            ),
            page(
                "Dəstəklənən kitabxanalar",
                "libraries.html",
                Category::Docs,
                &["kitabxanalar", "aiogram", "pyrogram", "python-telegram-bot", "ptb", "telebot", "pytelegramботapi", "dəstək"],
                "Dəstəklənən kitabxanalar Aiogram Pyrogram python-telegram-bot PTB pyTelegramBotAPI Telebot İnteqrasiya Dəstək",
                "Bütün dəstəklənən Python Telegram bot kitabxanalarının siyahısı",
            ),
        ],
        suggestions: phrases(&[
            "NEONPAY necə quraşdırılır",
            "Aiogram inteqrasiyası",
            "Ödəniş nümunələri",
            "Telegram Stars",
            "Premium xüsusiyyətlər",
            "İanə sistemi",
            "Abunəlik modeli",
            "API arayışı",
            "Sürətli başlanğıc",
            "Dəstəklənən kitabxanalar",
        ]),
        categories: labels("Ana səhifələr", "Sənədlər", "Kod nümunələri", "Məlumat"),
    }
}
