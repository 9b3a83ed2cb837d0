//! Translation tables and language selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-visible string goes through [`t`] so pages, form validators and
//! API error mapping render in the active [`Lang`]. Unknown keys render as the
//! key itself, which keeps missing translations visible without panicking.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    Az,
    En,
    Ru,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Az, Lang::En, Lang::Ru];

    /// Short code stored in `localStorage` and used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Az => "az",
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Parse a stored language code. Unknown codes return `None`.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "az" => Some(Self::Az),
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// Label shown in the language selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Az => "AZ",
            Self::En => "EN",
            Self::Ru => "RU",
        }
    }
}

/// Look up `key` in the table for `lang`, falling back to the key itself.
pub fn t(lang: Lang, key: &str) -> &str {
    ENTRIES
        .iter()
        .find(|(k, ..)| *k == key)
        .map_or(key, |(_, az, en, ru)| match lang {
            Lang::Az => az,
            Lang::En => en,
            Lang::Ru => ru,
        })
}

/// `(key, az, en, ru)`
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    // ---- general ----
    ("loading", "Yüklənir...", "Loading...", "Загрузка..."),
    ("error", "Xəta", "Error", "Ошибка"),
    ("save", "Yadda saxla", "Save", "Сохранить"),
    ("saving", "Yadda saxlanılır...", "Saving...", "Сохранение..."),
    ("cancel", "Ləğv et", "Cancel", "Отмена"),
    ("delete", "Sil", "Delete", "Удалить"),
    ("edit", "Düzəliş et", "Edit", "Изменить"),
    ("back", "Geri", "Back", "Назад"),
    ("actions", "Əməliyyatlar", "Actions", "Действия"),
    ("confirmDelete", "Silinməni təsdiqləyin", "Confirm deletion", "Подтвердите удаление"),
    (
        "confirmDeleteText",
        "Bu element həmişəlik silinəcək.",
        "This item will be permanently deleted.",
        "Этот элемент будет удалён навсегда.",
    ),
    ("fieldRequired", "doldurulmalıdır", "is required", "обязательно"),
    ("cannotBeEmpty", "boş ola bilməz", "cannot be empty", "не может быть пустым"),
    ("noItems", "Heç nə tapılmadı", "Nothing here yet", "Пока пусто"),
    ("language", "Dil", "Language", "Язык"),
    // ---- navigation ----
    ("home", "Ana səhifə", "Home", "Главная"),
    ("courses", "Kurslar", "Courses", "Курсы"),
    ("packages", "Paketlər", "Packages", "Пакеты"),
    ("dashboard", "Panel", "Dashboard", "Панель"),
    ("profile", "Profil", "Profile", "Профиль"),
    ("login", "Daxil ol", "Log in", "Войти"),
    ("logout", "Çıxış", "Log out", "Выйти"),
    ("register", "Qeydiyyat", "Sign up", "Регистрация"),
    ("admin", "Admin", "Admin", "Админ"),
    // ---- landing ----
    (
        "heroTitle",
        "Buraxılış imtahanlarına onlayn hazırlıq",
        "Online preparation for your final exams",
        "Онлайн-подготовка к выпускным экзаменам",
    ),
    (
        "heroSubtitle",
        "Video dərslər, testlər və süni intellekt köməkçisi bir platformada.",
        "Video lessons, quizzes and an AI assistant on one platform.",
        "Видеоуроки, тесты и ИИ-помощник на одной платформе.",
    ),
    ("getStarted", "Başla", "Get started", "Начать"),
    ("examGroupsTitle", "İmtahan qrupunuzu seçin", "Choose your exam group", "Выберите экзаменационную группу"),
    ("graduation", "Buraxılış", "Graduation", "Выпускной"),
    ("group1", "I qrup", "Group I", "I группа"),
    ("group2", "II qrup", "Group II", "II группа"),
    ("group3", "III qrup", "Group III", "III группа"),
    ("group4", "IV qrup", "Group IV", "IV группа"),
    ("group5", "V qrup", "Group V", "V группа"),
    ("math", "Riyaziyyat", "Mathematics", "Математика"),
    ("englishSubject", "İngilis dili", "English", "Английский язык"),
    ("azRus", "Azərbaycan / rus dili", "Azerbaijani / Russian", "Азербайджанский / русский язык"),
    ("physics", "Fizika", "Physics", "Физика"),
    ("informaticsChemistry", "İnformatika / kimya", "Computer science / Chemistry", "Информатика / химия"),
    ("geography", "Coğrafiya", "Geography", "География"),
    ("history", "Tarix", "History", "История"),
    ("literature", "Ədəbiyyat", "Literature", "Литература"),
    ("biology", "Biologiya", "Biology", "Биология"),
    ("chemistry", "Kimya", "Chemistry", "Химия"),
    ("featuresTitle", "Niyə biz?", "Why us?", "Почему мы?"),
    ("featureVideoTitle", "Video dərslər", "Video lessons", "Видеоуроки"),
    (
        "featureVideoText",
        "İstənilən vaxt izləyin, irəliləyişiniz yadda saxlanılır.",
        "Watch any time; your progress is saved.",
        "Смотрите когда угодно, прогресс сохраняется.",
    ),
    ("featureQuizTitle", "Testlər", "Quizzes", "Тесты"),
    (
        "featureQuizText",
        "Hər mövzudan sonra biliklərinizi yoxlayın.",
        "Check your knowledge after every topic.",
        "Проверяйте знания после каждой темы.",
    ),
    ("featureChatTitle", "Süni intellekt köməkçisi", "AI assistant", "ИИ-помощник"),
    (
        "featureChatText",
        "Dərs haqqında suallarınıza dərhal cavab alın.",
        "Get instant answers about the lesson.",
        "Мгновенные ответы по уроку.",
    ),
    ("pricingTitle", "Qiymətlər", "Pricing", "Цены"),
    ("faqTitle", "Tez-tez verilən suallar", "Frequently asked questions", "Частые вопросы"),
    ("faq1Q", "Paketi necə almaq olar?", "How do I buy a package?", "Как купить пакет?"),
    (
        "faq1A",
        "Qeydiyyatdan keçin, paketi seçin və ödənişi tamamlayın.",
        "Sign up, pick a package and complete the payment.",
        "Зарегистрируйтесь, выберите пакет и оплатите.",
    ),
    ("faq2Q", "Dərsləri neçə dəfə izləyə bilərəm?", "How often can I watch lessons?", "Сколько раз можно смотреть уроки?"),
    (
        "faq2A",
        "Abunəlik aktiv olduğu müddətdə limitsiz.",
        "Unlimited while your subscription is active.",
        "Без ограничений, пока подписка активна.",
    ),
    ("faq3Q", "Hansı dillərdə dərslər var?", "Which languages are lessons in?", "На каких языках уроки?"),
    (
        "faq3A",
        "Azərbaycan, rus və ingilis bölmələri mövcuddur.",
        "Azerbaijani, Russian and English sectors are available.",
        "Доступны азербайджанский, русский и английский секторы.",
    ),
    ("footerRights", "Bütün hüquqlar qorunur.", "All rights reserved.", "Все права защищены."),
    ("price", "Qiymət", "Price", "Цена"),
    // ---- auth ----
    ("username", "İstifadəçi adı", "Username", "Имя пользователя"),
    ("password", "Şifrə", "Password", "Пароль"),
    ("firstName", "Ad", "First name", "Имя"),
    ("lastName", "Soyad", "Last name", "Фамилия"),
    ("email", "E-poçt", "Email", "Эл. почта"),
    ("phoneNumber", "Telefon nömrəsi", "Phone number", "Номер телефона"),
    ("group", "Qrup", "Group", "Группа"),
    ("sector", "Bölmə", "Sector", "Сектор"),
    ("profilePicture", "Profil şəkli", "Profile picture", "Фото профиля"),
    ("showPassword", "Göstər", "Show", "Показать"),
    ("hidePassword", "Gizlət", "Hide", "Скрыть"),
    ("loggingIn", "Daxil olunur...", "Logging in...", "Вход..."),
    ("loginFailed", "Giriş uğursuz oldu", "Login failed", "Не удалось войти"),
    ("noAccount", "Hesabın yoxdur?", "No account yet?", "Нет аккаунта?"),
    ("alreadyHaveAccount", "Hesabın var?", "Already have an account?", "Уже есть аккаунт?"),
    ("registering", "Qeydiyyat edilir...", "Signing up...", "Регистрация..."),
    ("registrationFailed", "Qeydiyyat zamanı xəta baş verdi", "Registration failed", "Ошибка регистрации"),
    (
        "invalidPhone",
        "Düzgün telefon nömrəsi daxil edin (9 rəqəm)",
        "Enter a valid phone number (9 digits)",
        "Введите корректный номер (9 цифр)",
    ),
    ("invalidEmail", "Düzgün e-poçt daxil edin", "Enter a valid email", "Введите корректный email"),
    (
        "missingUserId",
        "Server cavabında istifadəçi ID-si tapılmadı",
        "Could not find user ID in server response",
        "В ответе сервера нет ID пользователя",
    ),
    // ---- email verification ----
    ("emailVerification", "E-poçtun təsdiqi", "Email verification", "Подтверждение почты"),
    (
        "verificationCodeHint",
        "E-poçtunuza göndərilən 4 rəqəmli kodu daxil edin",
        "Enter the 4-digit code sent to your email",
        "Введите 4-значный код из письма",
    ),
    ("verify", "Təsdiqlə", "Verify", "Подтвердить"),
    ("enterFullCode", "Kodu tam daxil edin", "Enter the full code", "Введите код полностью"),
    ("invalidUserIdFormat", "İstifadəçi ID-si yanlışdır", "Invalid user ID format", "Неверный формат ID"),
    ("invalidCodeFormat", "Kod 4 rəqəmdən ibarət olmalıdır", "The code must be 4 digits", "Код должен состоять из 4 цифр"),
    ("emailVerifiedSuccess", "E-poçt təsdiqləndi!", "Email verified!", "Почта подтверждена!"),
    ("invalidVerificationCode", "Təsdiq kodu yanlışdır", "Invalid verification code", "Неверный код подтверждения"),
    ("codeExpired", "Kodun vaxtı bitib", "The code has expired", "Срок действия кода истёк"),
    ("emailAlreadyVerified", "E-poçt artıq təsdiqlənib", "Email is already verified", "Почта уже подтверждена"),
    ("verificationFailed", "Təsdiq alınmadı", "Verification failed", "Подтверждение не удалось"),
    ("noUserIdProvided", "İstifadəçi ID-si verilməyib", "No user ID provided", "ID пользователя не указан"),
    // ---- dashboard ----
    (
        "noActiveSubscription",
        "Aktiv abunəliyiniz yoxdur",
        "You have no active subscriptions",
        "У вас нет активных подписок",
    ),
    (
        "noCoursesInPackages",
        "Paketlərinizdə kurs yoxdur",
        "Your packages contain no courses",
        "В ваших пакетах нет курсов",
    ),
    ("failedToLoadCourses", "Kursları yükləmək mümkün olmadı", "Failed to load courses", "Не удалось загрузить курсы"),
    ("loadingCourses", "Kurslar yüklənir...", "Loading courses...", "Загрузка курсов..."),
    ("coursesLoadFailed", "Kurslar yüklənmədi", "Courses could not be loaded", "Курсы не загружены"),
    ("viewAvailablePackages", "Paketlərə bax", "View available packages", "Посмотреть пакеты"),
    ("selectLesson", "Dərs seçin", "Select a lesson", "Выберите урок"),
    (
        "selectLessonDescription",
        "Soldakı siyahıdan dərs seçin",
        "Pick a lesson from the list on the left",
        "Выберите урок из списка слева",
    ),
    ("videoUnavailable", "Video mövcud deyil", "Video not available", "Видео недоступно"),
    // ---- packages & payment ----
    ("selectPackage", "Paket seçin", "Select a package", "Выберите пакет"),
    ("loadingPackages", "Paketlər yüklənir...", "Loading packages...", "Загрузка пакетов..."),
    ("packageDescription", "Təsvir", "Description", "Описание"),
    ("buyNow", "İndi al", "Buy now", "Купить"),
    ("processing", "Emal olunur...", "Processing...", "Обработка..."),
    ("paymentTitle", "Ödəniş", "Payment", "Оплата"),
    (
        "paymentDetailsMissing",
        "Ödəniş məlumatları tapılmadı. Zəhmət olmasa əvvəlcə paket seçin.",
        "No payment details found. Please select a package first.",
        "Данные оплаты не найдены. Сначала выберите пакет.",
    ),
    (
        "paymentDetailsInvalid",
        "Yanlış ödəniş məlumatları. Zəhmət olmasa paketi yenidən seçin.",
        "Invalid payment details. Please select the package again.",
        "Неверные данные оплаты. Выберите пакет заново.",
    ),
    ("payNow", "Ödə", "Pay now", "Оплатить"),
    ("paymentSuccess", "Ödəniş uğurla tamamlandı", "Payment successful", "Оплата прошла успешно"),
    (
        "paymentDemoNote",
        "Bu demo ödənişdir, heç bir məbləğ tutulmur.",
        "This is a demo payment; nothing is charged.",
        "Это демо-оплата, деньги не списываются.",
    ),
    ("goToDashboard", "Panelə keç", "Go to dashboard", "Перейти в панель"),
    ("amount", "Məbləğ", "Amount", "Сумма"),
    ("packageName", "Paket", "Package", "Пакет"),
    // ---- profile ----
    ("profileInformation", "Profil məlumatları", "Profile information", "Данные профиля"),
    ("editProfile", "Profili redaktə et", "Edit profile", "Редактировать профиль"),
    ("profileUpdateError", "Profili yeniləmək mümkün olmadı", "Failed to update profile", "Не удалось обновить профиль"),
    // ---- lessons ----
    ("backToCourse", "Kursa qayıt", "Back to course", "Назад к курсу"),
    ("markAsWatched", "Tamamlandı kimi qeyd et", "Mark as watched", "Отметить как просмотренный"),
    ("completed", "Tamamlanıb", "Completed", "Завершено"),
    ("nextLesson", "Növbəti dərs", "Next lesson", "Следующий урок"),
    ("aboutLesson", "Dərs haqqında", "About this lesson", "Об уроке"),
    ("materials", "Əlavə materiallar", "Materials", "Материалы"),
    ("transcript", "Transkripsiya", "Transcript", "Расшифровка"),
    ("comments", "Rəylər", "Comments", "Комментарии"),
    ("noComments", "Bu dərs üçün hələ rəy yoxdur.", "No comments yet.", "Комментариев пока нет."),
    ("writeComment", "Dərs haqqında rəy bildirin...", "Share your thoughts...", "Оставьте комментарий..."),
    ("send", "Göndər", "Send", "Отправить"),
    ("sending", "Göndərilir...", "Sending...", "Отправка..."),
    ("lessons", "Dərslər", "Lessons", "Уроки"),
    ("progress", "İrəliləyiş", "Progress", "Прогресс"),
    ("courseNotFound", "Kurs tapılmadı", "Course not found", "Курс не найден"),
    ("lessonMissing", "Dərs tapılmadı", "Lesson not found", "Урок не найден"),
    // ---- quiz ----
    ("prevQuestion", "Əvvəlki sual", "Previous question", "Предыдущий вопрос"),
    ("nextQuestion", "Sonrakı sual", "Next question", "Следующий вопрос"),
    ("finishQuiz", "Testi tamamla", "Finish quiz", "Завершить тест"),
    ("question", "Sual", "Question", "Вопрос"),
    ("option", "Variant", "Option", "Вариант"),
    ("quizResults", "Test nəticələri", "Quiz results", "Результаты теста"),
    (
        "quizPassed",
        "Təbriklər! Siz testi uğurla keçdiniz.",
        "Congratulations! You passed the quiz.",
        "Поздравляем! Тест пройден.",
    ),
    (
        "quizFailed",
        "Təəssüf ki, siz testin keçid balını toplaya bilmədiniz.",
        "Unfortunately you did not reach the passing score.",
        "К сожалению, проходной балл не набран.",
    ),
    ("correctAnswers", "Doğru cavablar", "Correct answers", "Правильные ответы"),
    ("passingScore", "Keçid balı", "Passing score", "Проходной балл"),
    ("retry", "Yenidən cəhd et", "Try again", "Попробовать снова"),
    ("quizNotFound", "Test tapılmadı", "Quiz not found", "Тест не найден"),
    // ---- chatbot ----
    ("chatTitle", "Köməkçi", "Assistant", "Помощник"),
    ("chatPlaceholder", "Sualınızı yazın...", "Ask a question...", "Задайте вопрос..."),
    ("chatWelcome", "Salam! Dərs haqqında sualınız var?", "Hi! Any questions about the lesson?", "Привет! Есть вопросы по уроку?"),
    ("openChat", "Çatı aç", "Open chat", "Открыть чат"),
    ("closeChat", "Çatı bağla", "Close chat", "Закрыть чат"),
    ("thinking", "Düşünür...", "Thinking...", "Думаю..."),
    (
        "sessionExpired",
        "Sessiyanın vaxtı bitib. Yenidən daxil olun.",
        "Your session has expired. Please log in again.",
        "Сессия истекла. Войдите снова.",
    ),
    ("noLessonAccess", "Bu dərsə girişiniz yoxdur.", "You do not have access to this lesson.", "Нет доступа к этому уроку."),
    ("lessonNotFound", "Dərs tapılmadı.", "The lesson could not be found.", "Урок не найден."),
    (
        "tooManyRequests",
        "Çox sayda sorğu. Bir az sonra yenidən cəhd edin.",
        "Too many requests. Please try again later.",
        "Слишком много запросов. Попробуйте позже.",
    ),
    (
        "chatGenericError",
        "Sualınızı emal edərkən xəta baş verdi.",
        "An error occurred while processing your question.",
        "Ошибка при обработке вопроса.",
    ),
    (
        "noResponse",
        "Serverdən cavab yoxdur. İnternet bağlantınızı yoxlayın.",
        "No response from server. Please check your internet connection.",
        "Нет ответа от сервера. Проверьте подключение.",
    ),
    (
        "noDemoLesson",
        "Uyğun dərs tapılmadı. Bir az sonra yenidən cəhd edin.",
        "Could not find a valid lesson. Please try again later.",
        "Не найден подходящий урок. Попробуйте позже.",
    ),
    // ---- api errors ----
    ("notFound", "Sorğu edilən məlumat tapılmadı.", "The requested resource was not found.", "Запрошенный ресурс не найден."),
    ("forbidden", "Bu əməliyyat üçün icazəniz yoxdur.", "You are not allowed to do this.", "Недостаточно прав."),
    (
        "networkError",
        "Şəbəkə xətası. İnternet bağlantınızı yoxlayın.",
        "Network error. Please check your internet connection.",
        "Ошибка сети. Проверьте подключение.",
    ),
    ("genericError", "Xəta baş verdi", "An error occurred", "Произошла ошибка"),
    ("unavailable", "Brauzerdə mövcuddur", "Only available in the browser", "Доступно только в браузере"),
    // ---- admin ----
    ("adminPanel", "İdarəetmə paneli", "Admin panel", "Панель управления"),
    ("title", "Başlıq", "Title", "Название"),
    ("description", "Təsvir", "Description", "Описание"),
    ("subject", "Fənn", "Subject", "Предмет"),
    ("image", "Şəkil", "Image", "Изображение"),
    ("video", "Video", "Video", "Видео"),
    ("order", "Sıra", "Order", "Порядок"),
    ("content", "Məzmun", "Content", "Содержание"),
    ("course", "Kurs", "Course", "Курс"),
    ("selectCourse", "Kurs seçin", "Select a course", "Выберите курс"),
    ("quizzes", "Testlər", "Quizzes", "Тесты"),
    ("newCourse", "Yeni kurs", "New course", "Новый курс"),
    ("editCourse", "Kursu düzəliş et", "Edit course", "Изменить курс"),
    ("newLesson", "Yeni dərs", "New lesson", "Новый урок"),
    ("editLesson", "Dərsi düzəliş et", "Edit lesson", "Изменить урок"),
    ("newQuiz", "Yeni test əlavə et", "New quiz", "Новый тест"),
    ("editQuiz", "Testi düzəliş et", "Edit quiz", "Изменить тест"),
    ("newPackage", "Yeni paket əlavə et", "New package", "Новый пакет"),
    ("editPackage", "Paketi düzəliş et", "Edit package", "Изменить пакет"),
    ("timeLimit", "Vaxt limiti (dəq)", "Time limit (min)", "Лимит времени (мин)"),
    ("questions", "Suallar", "Questions", "Вопросы"),
    ("addQuestion", "Sual əlavə et", "Add question", "Добавить вопрос"),
    ("removeQuestion", "Sualı sil", "Remove question", "Удалить вопрос"),
    ("correctOption", "Düzgün variant", "Correct option", "Правильный вариант"),
    (
        "quizNeedsQuestion",
        "Test ən azı bir suala sahib olmalıdır",
        "A quiz needs at least one question",
        "В тесте должен быть хотя бы один вопрос",
    ),
    ("correctOptionOutOfRange", "düzgün variant seçilməyib", "has no valid correct option", "не выбран правильный вариант"),
    ("priceMustBeNonNegative", "Qiymət mənfi ola bilməz", "Price cannot be negative", "Цена не может быть отрицательной"),
    (
        "packageNeedsCourse",
        "Paketə ən azı bir kurs əlavə edin",
        "Add at least one course to the package",
        "Добавьте в пакет хотя бы один курс",
    ),
    ("orderMustBeNonNegative", "Sıra mənfi ola bilməz", "Order cannot be negative", "Порядок не может быть отрицательным"),
    ("discount", "Endirim", "Discount", "Скидка"),
    ("durationDays", "Müddət (gün)", "Duration (days)", "Срок (дни)"),
    ("status", "Status", "Status", "Статус"),
    ("invalidNumber", "Düzgün rəqəm daxil edin", "Enter a valid number", "Введите корректное число"),
    ("newItem", "Yeni", "New", "Новый"),
    ("updatedAt", "Yenilənib", "Updated", "Обновлено"),
    ("lesson", "Dərs", "Lesson", "Урок"),
    ("noLesson", "Dərsə bağlı deyil", "Not tied to a lesson", "Без привязки к уроку"),
    ("minutes", "dəq", "min", "мин"),
];
