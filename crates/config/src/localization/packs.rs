//! Built-in language packs
//!
//! Every language offered at intake carries all four steps, so a session
//! never mixes scripts.

use std::collections::BTreeMap;

use super::{LanguagePack, QuestionOption, StepText};

type Options<'a> = &'a [(&'a str, &'a str, &'a str)];

fn pack(greeting: &str, fallback_error: &str, steps: [(&str, Options<'_>); 4]) -> LanguagePack {
    let steps = steps
        .iter()
        .zip(1u8..)
        .map(|((question, options), ordinal)| {
            let step = StepText {
                question: question.to_string(),
                options: options
                    .iter()
                    .map(|(key, label, description)| QuestionOption::new(key, label, description))
                    .collect(),
            };
            (ordinal, step)
        })
        .collect();

    LanguagePack {
        greeting: greeting.to_string(),
        fallback_error: fallback_error.to_string(),
        steps,
    }
}

pub(super) fn builtin() -> BTreeMap<String, LanguagePack> {
    [
        ("English", english()),
        ("Hindi", hindi()),
        ("Marathi", marathi()),
        ("Gujarati", gujarati()),
        ("Tamil", tamil()),
        ("Telugu", telugu()),
        ("Kannada", kannada()),
        ("Bengali", bengali()),
    ]
    .into_iter()
    .map(|(name, pack)| (name.to_string(), pack))
    .collect()
}

fn english() -> LanguagePack {
    pack(
        "Hello! 👋 Welcome to the Franchise Advisor. I'll help you find the right franchise opportunity in India. Let's start with a few quick questions.\n\n**What type of business interests you the most?**",
        "Sorry, I'm having trouble responding right now. Please try again.",
        [
            (
                "What type of business interests you the most?",
                &[
                    ("A", "Food & Beverage", "Restaurants, cafes, quick service food"),
                    ("B", "Retail", "Apparel, grocery, electronics stores"),
                    ("C", "Education & Training", "Coaching, preschools, skill development"),
                    ("D", "Health & Fitness", "Gyms, yoga studios, wellness centres"),
                    ("E", "Services", "Salons, cleaning, courier, automotive services"),
                ],
            ),
            (
                "How much business experience do you have?",
                &[
                    ("A", "First-time business owner", "I have never run a business"),
                    ("B", "Some experience", "I have run or worked in a small business"),
                    ("C", "Experienced entrepreneur", "I have successfully run several businesses"),
                    ("D", "Existing franchise owner", "I already own one or more franchises"),
                ],
            ),
            (
                "How much risk are you comfortable taking?",
                &[
                    ("A", "Low risk", "Established brands, steady but slower returns"),
                    ("B", "Moderate risk", "Growing brands, balanced returns"),
                    ("C", "High risk", "Emerging brands, higher return potential"),
                ],
            ),
            (
                "What are your investment goals?",
                &[
                    ("A", "Quick returns", "Recover the investment within 1 year"),
                    ("B", "Steady income", "Regular monthly income over 1-3 years"),
                    ("C", "Long-term wealth", "Grow the business over 3+ years"),
                    ("D", "Passive investment", "Low daily involvement, managed operations"),
                ],
            ),
        ],
    )
}

fn hindi() -> LanguagePack {
    pack(
        "नमस्ते! 👋 फ्रैंचाइज़ी सलाहकार में आपका स्वागत है। मैं भारत में आपके लिए सही फ्रैंचाइज़ी खोजने में आपकी मदद करूंगा। चलिए कुछ आसान सवालों से शुरू करते हैं।\n\n**आपको किस प्रकार का व्यवसाय सबसे अधिक पसंद है?**",
        "क्षमा करें, अभी जवाब देने में समस्या आ रही है। कृपया फिर से प्रयास करें।",
        [
            (
                "आपको किस प्रकार का व्यवसाय सबसे अधिक पसंद है?",
                &[
                    ("A", "खाद्य और पेय पदार्थ", "रेस्टोरेंट, कैफ़े, क्विक सर्विस फ़ूड"),
                    ("B", "खुदरा व्यापार", "कपड़े, किराना, इलेक्ट्रॉनिक्स स्टोर"),
                    ("C", "शिक्षा और प्रशिक्षण", "कोचिंग, प्रीस्कूल, कौशल विकास"),
                    ("D", "स्वास्थ्य और फिटनेस", "जिम, योग स्टूडियो, वेलनेस सेंटर"),
                    ("E", "सेवाएं", "सैलून, सफ़ाई, कूरियर, ऑटोमोबाइल सेवाएं"),
                ],
            ),
            (
                "आपके पास व्यवसाय का कितना अनुभव है?",
                &[
                    ("A", "पहली बार व्यवसाय", "मेरे पास कोई व्यवसाय अनुभव नहीं है"),
                    ("B", "कुछ अनुभव", "मैंने पहले छोटा व्यवसाय चलाया है या उसमें काम किया है"),
                    ("C", "अनुभवी उद्यमी", "मैंने कई व्यवसाय सफलतापूर्वक चलाए हैं"),
                    ("D", "मौजूदा फ्रैंचाइज़ी मालिक", "मेरे पास पहले से एक या अधिक फ्रैंचाइज़ी हैं"),
                ],
            ),
            (
                "आप कितना जोखिम उठाने के लिए तैयार हैं?",
                &[
                    ("A", "कम जोखिम", "स्थापित ब्रांड, स्थिर लेकिन धीमा रिटर्न"),
                    ("B", "मध्यम जोखिम", "बढ़ते ब्रांड, संतुलित रिटर्न"),
                    ("C", "उच्च जोखिम", "नए ब्रांड, अधिक रिटर्न की संभावना"),
                ],
            ),
            (
                "आपके निवेश के लक्ष्य क्या हैं?",
                &[
                    ("A", "जल्दी रिटर्न", "1 साल के भीतर निवेश की वापसी"),
                    ("B", "स्थिर आय", "1-3 साल में नियमित मासिक आय"),
                    ("C", "दीर्घकालिक संपत्ति", "3+ साल में व्यवसाय का विस्तार"),
                    ("D", "निष्क्रिय निवेश", "कम दैनिक भागीदारी, प्रबंधित संचालन"),
                ],
            ),
        ],
    )
}

fn marathi() -> LanguagePack {
    pack(
        "नमस्कार! 👋 फ्रँचायझी सल्लागारामध्ये आपले स्वागत आहे. भारतात आपल्यासाठी योग्य फ्रँचायझी शोधण्यात मी मदत करेन. चला काही सोप्या प्रश्नांनी सुरुवात करूया.\n\n**तुम्हाला कोणत्या प्रकारचा व्यवसाय सर्वात जास्त आवडतो?**",
        "क्षमस्व, सध्या उत्तर देण्यात अडचण येत आहे. कृपया पुन्हा प्रयत्न करा.",
        [
            (
                "तुम्हाला कोणत्या प्रकारचा व्यवसाय सर्वात जास्त आवडतो?",
                &[
                    ("A", "खाद्य आणि पेय", "रेस्टॉरंट, कॅफे, क्विक सर्व्हिस फूड"),
                    ("B", "किरकोळ विक्री", "कपडे, किराणा, इलेक्ट्रॉनिक्स दुकाने"),
                    ("C", "शिक्षण आणि प्रशिक्षण", "कोचिंग, प्री-स्कूल, कौशल्य विकास"),
                    ("D", "आरोग्य आणि फिटनेस", "जिम, योग स्टुडिओ, वेलनेस सेंटर"),
                    ("E", "सेवा", "सलून, स्वच्छता, कुरिअर, वाहन सेवा"),
                ],
            ),
            (
                "तुम्हाला व्यवसायाचा किती अनुभव आहे?",
                &[
                    ("A", "पहिल्यांदाच व्यवसाय", "मी यापूर्वी कधीही व्यवसाय चालवलेला नाही"),
                    ("B", "थोडा अनुभव", "मी छोटा व्यवसाय चालवला आहे किंवा त्यात काम केले आहे"),
                    ("C", "अनुभवी उद्योजक", "मी अनेक व्यवसाय यशस्वीपणे चालवले आहेत"),
                    ("D", "सध्याचे फ्रँचायझी मालक", "माझ्याकडे आधीच एक किंवा अधिक फ्रँचायझी आहेत"),
                ],
            ),
            (
                "तुम्ही किती जोखीम घेण्यास तयार आहात?",
                &[
                    ("A", "कमी जोखीम", "प्रस्थापित ब्रँड, स्थिर पण हळू परतावा"),
                    ("B", "मध्यम जोखीम", "वाढणारे ब्रँड, संतुलित परतावा"),
                    ("C", "जास्त जोखीम", "नवीन ब्रँड, जास्त परताव्याची शक्यता"),
                ],
            ),
            (
                "तुमची गुंतवणुकीची उद्दिष्टे काय आहेत?",
                &[
                    ("A", "लवकर परतावा", "1 वर्षात गुंतवणूक परत"),
                    ("B", "स्थिर उत्पन्न", "1-3 वर्षांत नियमित मासिक उत्पन्न"),
                    ("C", "दीर्घकालीन संपत्ती", "3+ वर्षांत व्यवसायाची वाढ"),
                    ("D", "निष्क्रिय गुंतवणूक", "कमी दैनंदिन सहभाग, व्यवस्थापित कामकाज"),
                ],
            ),
        ],
    )
}

fn gujarati() -> LanguagePack {
    pack(
        "નમસ્તે! 👋 ફ્રેન્ચાઇઝ સલાહકારમાં આપનું સ્વાગત છે. ભારતમાં તમારા માટે યોગ્ય ફ્રેન્ચાઇઝ શોધવામાં હું મદદ કરીશ. ચાલો થોડા સરળ પ્રશ્નોથી શરૂઆત કરીએ.\n\n**તમને કયા પ્રકારનો વ્યવસાય સૌથી વધુ ગમે છે?**",
        "માફ કરશો, અત્યારે જવાબ આપવામાં સમસ્યા આવી રહી છે. કૃપા કરીને ફરી પ્રયાસ કરો.",
        [
            (
                "તમને કયા પ્રકારનો વ્યવસાય સૌથી વધુ ગમે છે?",
                &[
                    ("A", "ખાણી-પીણી", "રેસ્ટોરન્ટ, કાફે, ક્વિક સર્વિસ ફૂડ"),
                    ("B", "છૂટક વેપાર", "કપડાં, કરિયાણું, ઇલેક્ટ્રોનિક્સ સ્ટોર"),
                    ("C", "શિક્ષણ અને તાલીમ", "કોચિંગ, પ્રી-સ્કૂલ, કૌશલ્ય વિકાસ"),
                    ("D", "આરોગ્ય અને ફિટનેસ", "જિમ, યોગ સ્ટુડિયો, વેલનેસ સેન્ટર"),
                    ("E", "સેવાઓ", "સલૂન, સફાઈ, કુરિયર, વાહન સેવાઓ"),
                ],
            ),
            (
                "તમારી પાસે વ્યવસાયનો કેટલો અનુભવ છે?",
                &[
                    ("A", "પહેલી વાર વ્યવસાય", "મેં ક્યારેય વ્યવસાય ચલાવ્યો નથી"),
                    ("B", "થોડો અનુભવ", "મેં નાનો વ્યવસાય ચલાવ્યો છે અથવા તેમાં કામ કર્યું છે"),
                    ("C", "અનુભવી ઉદ્યોગસાહસિક", "મેં ઘણા વ્યવસાય સફળતાપૂર્વક ચલાવ્યા છે"),
                    ("D", "હાલના ફ્રેન્ચાઇઝ માલિક", "મારી પાસે પહેલેથી એક અથવા વધુ ફ્રેન્ચાઇઝ છે"),
                ],
            ),
            (
                "તમે કેટલું જોખમ લેવા તૈયાર છો?",
                &[
                    ("A", "ઓછું જોખમ", "સ્થાપિત બ્રાન્ડ, સ્થિર પણ ધીમું વળતર"),
                    ("B", "મધ્યમ જોખમ", "વિકસતી બ્રાન્ડ, સંતુલિત વળતર"),
                    ("C", "ઊંચું જોખમ", "નવી બ્રાન્ડ, વધુ વળતરની સંભાવના"),
                ],
            ),
            (
                "તમારા રોકાણના લક્ષ્યો શું છે?",
                &[
                    ("A", "ઝડપી વળતર", "1 વર્ષમાં રોકાણ પાછું"),
                    ("B", "સ્થિર આવક", "1-3 વર્ષમાં નિયમિત માસિક આવક"),
                    ("C", "લાંબા ગાળાની સંપત્તિ", "3+ વર્ષમાં વ્યવસાયનો વિકાસ"),
                    ("D", "નિષ્ક્રિય રોકાણ", "ઓછી દૈનિક સંડોવણી, સંચાલિત કામગીરી"),
                ],
            ),
        ],
    )
}

fn tamil() -> LanguagePack {
    pack(
        "வணக்கம்! 👋 ஃப்ரான்சைஸ் ஆலோசகருக்கு உங்களை வரவேற்கிறோம். இந்தியாவில் உங்களுக்கு ஏற்ற ஃப்ரான்சைஸைக் கண்டறிய நான் உதவுகிறேன். சில எளிய கேள்விகளுடன் தொடங்குவோம்.\n\n**எந்த வகையான வணிகம் உங்களுக்கு மிகவும் பிடிக்கும்?**",
        "மன்னிக்கவும், இப்போது பதிலளிப்பதில் சிக்கல் உள்ளது. தயவுசெய்து மீண்டும் முயற்சிக்கவும்.",
        [
            (
                "எந்த வகையான வணிகம் உங்களுக்கு மிகவும் பிடிக்கும்?",
                &[
                    ("A", "உணவு மற்றும் பானங்கள்", "உணவகங்கள், கஃபேக்கள், விரைவு உணவு"),
                    ("B", "சில்லறை வணிகம்", "ஆடைகள், மளிகை, மின்னணு கடைகள்"),
                    ("C", "கல்வி மற்றும் பயிற்சி", "பயிற்சி மையங்கள், மழலையர் பள்ளிகள், திறன் மேம்பாடு"),
                    ("D", "உடல்நலம் மற்றும் உடற்பயிற்சி", "ஜிம், யோகா ஸ்டுடியோ, நல்வாழ்வு மையங்கள்"),
                    ("E", "சேவைகள்", "சலூன், சுத்தம் செய்தல், கூரியர், வாகன சேவைகள்"),
                ],
            ),
            (
                "உங்களுக்கு எவ்வளவு வணிக அனுபவம் உள்ளது?",
                &[
                    ("A", "முதல் முறை தொழில்முனைவோர்", "நான் இதுவரை வணிகம் நடத்தியதில்லை"),
                    ("B", "சிறிது அனுபவம்", "நான் சிறு வணிகம் நடத்தியுள்ளேன் அல்லது அதில் பணியாற்றியுள்ளேன்"),
                    ("C", "அனுபவமிக்க தொழில்முனைவோர்", "நான் பல வணிகங்களை வெற்றிகரமாக நடத்தியுள்ளேன்"),
                    ("D", "தற்போதைய ஃப்ரான்சைஸ் உரிமையாளர்", "என்னிடம் ஏற்கனவே ஒன்று அல்லது அதற்கு மேற்பட்ட ஃப்ரான்சைஸ்கள் உள்ளன"),
                ],
            ),
            (
                "நீங்கள் எவ்வளவு அபாயத்தை ஏற்கத் தயாராக உள்ளீர்கள்?",
                &[
                    ("A", "குறைந்த அபாயம்", "நிலைபெற்ற பிராண்டுகள், நிலையான ஆனால் மெதுவான வருமானம்"),
                    ("B", "மிதமான அபாயம்", "வளரும் பிராண்டுகள், சமநிலையான வருமானம்"),
                    ("C", "அதிக அபாயம்", "புதிய பிராண்டுகள், அதிக வருமான வாய்ப்பு"),
                ],
            ),
            (
                "உங்கள் முதலீட்டு இலக்குகள் என்ன?",
                &[
                    ("A", "விரைவான வருமானம்", "1 ஆண்டுக்குள் முதலீட்டைத் திரும்பப் பெறுதல்"),
                    ("B", "நிலையான வருமானம்", "1-3 ஆண்டுகளில் வழக்கமான மாத வருமானம்"),
                    ("C", "நீண்ட கால செல்வம்", "3+ ஆண்டுகளில் வணிக வளர்ச்சி"),
                    ("D", "செயலற்ற முதலீடு", "குறைந்த தினசரி ஈடுபாடு, நிர்வகிக்கப்படும் செயல்பாடுகள்"),
                ],
            ),
        ],
    )
}

fn telugu() -> LanguagePack {
    pack(
        "నమస్కారం! 👋 ఫ్రాంచైజ్ సలహాదారుకు స్వాగతం. భారతదేశంలో మీకు సరైన ఫ్రాంచైజ్‌ను కనుగొనడంలో నేను సహాయం చేస్తాను. కొన్ని సులభమైన ప్రశ్నలతో ప్రారంభిద్దాం.\n\n**మీకు ఏ రకమైన వ్యాపారం అంటే ఎక్కువ ఆసక్తి?**",
        "క్షమించండి, ప్రస్తుతం సమాధానం ఇవ్వడంలో సమస్య ఉంది. దయచేసి మళ్లీ ప్రయత్నించండి.",
        [
            (
                "మీకు ఏ రకమైన వ్యాపారం అంటే ఎక్కువ ఆసక్తి?",
                &[
                    ("A", "ఆహారం మరియు పానీయాలు", "రెస్టారెంట్లు, కేఫ్‌లు, క్విక్ సర్వీస్ ఫుడ్"),
                    ("B", "రిటైల్", "దుస్తులు, కిరాణా, ఎలక్ట్రానిక్స్ దుకాణాలు"),
                    ("C", "విద్య మరియు శిక్షణ", "కోచింగ్, ప్రీస్కూల్స్, నైపుణ్యాభివృద్ధి"),
                    ("D", "ఆరోగ్యం మరియు ఫిట్‌నెస్", "జిమ్‌లు, యోగా స్టూడియోలు, వెల్‌నెస్ కేంద్రాలు"),
                    ("E", "సేవలు", "సెలూన్లు, శుభ్రపరచడం, కొరియర్, వాహన సేవలు"),
                ],
            ),
            (
                "మీకు ఎంత వ్యాపార అనుభవం ఉంది?",
                &[
                    ("A", "మొదటిసారి వ్యాపారం", "నేను ఎప్పుడూ వ్యాపారం నడపలేదు"),
                    ("B", "కొంత అనుభవం", "నేను చిన్న వ్యాపారం నడిపాను లేదా అందులో పనిచేశాను"),
                    ("C", "అనుభవజ్ఞుడైన వ్యాపారవేత్త", "నేను అనేక వ్యాపారాలను విజయవంతంగా నడిపాను"),
                    ("D", "ప్రస్తుత ఫ్రాంచైజ్ యజమాని", "నా దగ్గర ఇప్పటికే ఒకటి లేదా అంతకంటే ఎక్కువ ఫ్రాంచైజీలు ఉన్నాయి"),
                ],
            ),
            (
                "మీరు ఎంత రిస్క్ తీసుకోవడానికి సిద్ధంగా ఉన్నారు?",
                &[
                    ("A", "తక్కువ రిస్క్", "స్థిరపడిన బ్రాండ్లు, స్థిరమైన కానీ నెమ్మదైన రాబడి"),
                    ("B", "మధ్యస్థ రిస్క్", "ఎదుగుతున్న బ్రాండ్లు, సమతుల్య రాబడి"),
                    ("C", "ఎక్కువ రిస్క్", "కొత్త బ్రాండ్లు, అధిక రాబడి అవకాశం"),
                ],
            ),
            (
                "మీ పెట్టుబడి లక్ష్యాలు ఏమిటి?",
                &[
                    ("A", "త్వరిత రాబడి", "1 సంవత్సరంలో పెట్టుబడి తిరిగి పొందడం"),
                    ("B", "స్థిర ఆదాయం", "1-3 సంవత్సరాల్లో క్రమమైన నెలవారీ ఆదాయం"),
                    ("C", "దీర్ఘకాలిక సంపద", "3+ సంవత్సరాల్లో వ్యాపార వృద్ధి"),
                    ("D", "నిష్క్రియ పెట్టుబడి", "తక్కువ రోజువారీ ప్రమేయం, నిర్వహించబడే కార్యకలాపాలు"),
                ],
            ),
        ],
    )
}

fn kannada() -> LanguagePack {
    pack(
        "ನಮಸ್ಕಾರ! 👋 ಫ್ರಾಂಚೈಸ್ ಸಲಹೆಗಾರರಿಗೆ ಸ್ವಾಗತ. ಭಾರತದಲ್ಲಿ ನಿಮಗೆ ಸೂಕ್ತವಾದ ಫ್ರಾಂಚೈಸ್ ಹುಡುಕಲು ನಾನು ಸಹಾಯ ಮಾಡುತ್ತೇನೆ. ಕೆಲವು ಸರಳ ಪ್ರಶ್ನೆಗಳೊಂದಿಗೆ ಪ್ರಾರಂಭಿಸೋಣ.\n\n**ನಿಮಗೆ ಯಾವ ರೀತಿಯ ವ್ಯವಹಾರ ಹೆಚ್ಚು ಇಷ್ಟ?**",
        "ಕ್ಷಮಿಸಿ, ಈಗ ಉತ್ತರಿಸಲು ತೊಂದರೆಯಾಗುತ್ತಿದೆ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.",
        [
            (
                "ನಿಮಗೆ ಯಾವ ರೀತಿಯ ವ್ಯವಹಾರ ಹೆಚ್ಚು ಇಷ್ಟ?",
                &[
                    ("A", "ಆಹಾರ ಮತ್ತು ಪಾನೀಯ", "ರೆಸ್ಟೋರೆಂಟ್‌ಗಳು, ಕೆಫೆಗಳು, ಕ್ವಿಕ್ ಸರ್ವಿಸ್ ಆಹಾರ"),
                    ("B", "ಚಿಲ್ಲರೆ ವ್ಯಾಪಾರ", "ಬಟ್ಟೆ, ದಿನಸಿ, ಎಲೆಕ್ಟ್ರಾನಿಕ್ಸ್ ಅಂಗಡಿಗಳು"),
                    ("C", "ಶಿಕ್ಷಣ ಮತ್ತು ತರಬೇತಿ", "ಕೋಚಿಂಗ್, ಪ್ರೀಸ್ಕೂಲ್‌ಗಳು, ಕೌಶಲ್ಯ ಅಭಿವೃದ್ಧಿ"),
                    ("D", "ಆರೋಗ್ಯ ಮತ್ತು ಫಿಟ್‌ನೆಸ್", "ಜಿಮ್‌ಗಳು, ಯೋಗ ಸ್ಟುಡಿಯೋಗಳು, ವೆಲ್‌ನೆಸ್ ಕೇಂದ್ರಗಳು"),
                    ("E", "ಸೇವೆಗಳು", "ಸಲೂನ್‌ಗಳು, ಸ್ವಚ್ಛತೆ, ಕೊರಿಯರ್, ವಾಹನ ಸೇವೆಗಳು"),
                ],
            ),
            (
                "ನಿಮಗೆ ಎಷ್ಟು ವ್ಯವಹಾರ ಅನುಭವವಿದೆ?",
                &[
                    ("A", "ಮೊದಲ ಬಾರಿಗೆ ವ್ಯವಹಾರ", "ನಾನು ಹಿಂದೆಂದೂ ವ್ಯವಹಾರ ನಡೆಸಿಲ್ಲ"),
                    ("B", "ಸ್ವಲ್ಪ ಅನುಭವ", "ನಾನು ಸಣ್ಣ ವ್ಯವಹಾರ ನಡೆಸಿದ್ದೇನೆ ಅಥವಾ ಅದರಲ್ಲಿ ಕೆಲಸ ಮಾಡಿದ್ದೇನೆ"),
                    ("C", "ಅನುಭವಿ ಉದ್ಯಮಿ", "ನಾನು ಹಲವು ವ್ಯವಹಾರಗಳನ್ನು ಯಶಸ್ವಿಯಾಗಿ ನಡೆಸಿದ್ದೇನೆ"),
                    ("D", "ಈಗಿನ ಫ್ರಾಂಚೈಸ್ ಮಾಲೀಕ", "ನನ್ನ ಬಳಿ ಈಗಾಗಲೇ ಒಂದು ಅಥವಾ ಹೆಚ್ಚು ಫ್ರಾಂಚೈಸ್‌ಗಳಿವೆ"),
                ],
            ),
            (
                "ನೀವು ಎಷ್ಟು ಅಪಾಯ ತೆಗೆದುಕೊಳ್ಳಲು ಸಿದ್ಧರಿದ್ದೀರಿ?",
                &[
                    ("A", "ಕಡಿಮೆ ಅಪಾಯ", "ಸ್ಥಾಪಿತ ಬ್ರ್ಯಾಂಡ್‌ಗಳು, ಸ್ಥಿರ ಆದರೆ ನಿಧಾನ ಆದಾಯ"),
                    ("B", "ಮಧ್ಯಮ ಅಪಾಯ", "ಬೆಳೆಯುತ್ತಿರುವ ಬ್ರ್ಯಾಂಡ್‌ಗಳು, ಸಮತೋಲಿತ ಆದಾಯ"),
                    ("C", "ಹೆಚ್ಚಿನ ಅಪಾಯ", "ಹೊಸ ಬ್ರ್ಯಾಂಡ್‌ಗಳು, ಹೆಚ್ಚಿನ ಆದಾಯದ ಸಾಧ್ಯತೆ"),
                ],
            ),
            (
                "ನಿಮ್ಮ ಹೂಡಿಕೆ ಗುರಿಗಳೇನು?",
                &[
                    ("A", "ತ್ವರಿತ ಆದಾಯ", "1 ವರ್ಷದೊಳಗೆ ಹೂಡಿಕೆ ವಾಪಸ್"),
                    ("B", "ಸ್ಥಿರ ಆದಾಯ", "1-3 ವರ್ಷಗಳಲ್ಲಿ ನಿಯಮಿತ ಮಾಸಿಕ ಆದಾಯ"),
                    ("C", "ದೀರ್ಘಾವಧಿ ಸಂಪತ್ತು", "3+ ವರ್ಷಗಳಲ್ಲಿ ವ್ಯವಹಾರದ ಬೆಳವಣಿಗೆ"),
                    ("D", "ನಿಷ್ಕ್ರಿಯ ಹೂಡಿಕೆ", "ಕಡಿಮೆ ದೈನಂದಿನ ತೊಡಗಿಸಿಕೊಳ್ಳುವಿಕೆ, ನಿರ್ವಹಿತ ಕಾರ್ಯಾಚರಣೆ"),
                ],
            ),
        ],
    )
}

fn bengali() -> LanguagePack {
    pack(
        "নমস্কার! 👋 ফ্র্যাঞ্চাইজি উপদেষ্টায় আপনাকে স্বাগতম। ভারতে আপনার জন্য সঠিক ফ্র্যাঞ্চাইজি খুঁজে পেতে আমি সাহায্য করব। চলুন কয়েকটি সহজ প্রশ্ন দিয়ে শুরু করি।\n\n**কোন ধরনের ব্যবসা আপনার সবচেয়ে বেশি পছন্দ?**",
        "দুঃখিত, এই মুহূর্তে উত্তর দিতে সমস্যা হচ্ছে। অনুগ্রহ করে আবার চেষ্টা করুন।",
        [
            (
                "কোন ধরনের ব্যবসা আপনার সবচেয়ে বেশি পছন্দ?",
                &[
                    ("A", "খাদ্য ও পানীয়", "রেস্তোরাঁ, ক্যাফে, কুইক সার্ভিস খাবার"),
                    ("B", "খুচরা ব্যবসা", "পোশাক, মুদি, ইলেকট্রনিক্সের দোকান"),
                    ("C", "শিক্ষা ও প্রশিক্ষণ", "কোচিং, প্রি-স্কুল, দক্ষতা উন্নয়ন"),
                    ("D", "স্বাস্থ্য ও ফিটনেস", "জিম, যোগ স্টুডিও, ওয়েলনেস সেন্টার"),
                    ("E", "পরিষেবা", "সেলুন, পরিষ্কার, কুরিয়ার, গাড়ি পরিষেবা"),
                ],
            ),
            (
                "আপনার ব্যবসার অভিজ্ঞতা কতটা?",
                &[
                    ("A", "প্রথমবার ব্যবসা", "আমি আগে কখনো ব্যবসা চালাইনি"),
                    ("B", "কিছু অভিজ্ঞতা", "আমি ছোট ব্যবসা চালিয়েছি বা তাতে কাজ করেছি"),
                    ("C", "অভিজ্ঞ উদ্যোক্তা", "আমি একাধিক ব্যবসা সফলভাবে চালিয়েছি"),
                    ("D", "বর্তমান ফ্র্যাঞ্চাইজি মালিক", "আমার ইতিমধ্যে এক বা একাধিক ফ্র্যাঞ্চাইজি আছে"),
                ],
            ),
            (
                "আপনি কতটা ঝুঁকি নিতে প্রস্তুত?",
                &[
                    ("A", "কম ঝুঁকি", "প্রতিষ্ঠিত ব্র্যান্ড, স্থির কিন্তু ধীর আয়"),
                    ("B", "মাঝারি ঝুঁকি", "বর্ধনশীল ব্র্যান্ড, ভারসাম্যপূর্ণ আয়"),
                    ("C", "উচ্চ ঝুঁকি", "নতুন ব্র্যান্ড, বেশি আয়ের সম্ভাবনা"),
                ],
            ),
            (
                "আপনার বিনিয়োগের লক্ষ্য কী?",
                &[
                    ("A", "দ্রুত রিটার্ন", "১ বছরের মধ্যে বিনিয়োগ ফেরত"),
                    ("B", "স্থির আয়", "১-৩ বছরে নিয়মিত মাসিক আয়"),
                    ("C", "দীর্ঘমেয়াদী সম্পদ", "৩+ বছরে ব্যবসার বৃদ্ধি"),
                    ("D", "প্যাসিভ বিনিয়োগ", "কম দৈনিক সম্পৃক্ততা, পরিচালিত কার্যক্রম"),
                ],
            ),
        ],
    )
}
